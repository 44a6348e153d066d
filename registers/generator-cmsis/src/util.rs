// Licensed under the Apache-2.0 license

//! Utility functions for shortening register names.

/// Returns the longest common leading substring of `names`.
///
/// Only the lexicographically smallest and largest names are compared: any
/// point where those two diverge also bounds the prefix shared by every name
/// between them.
///
/// # Examples
/// ```
/// use mcu_registers_generator_cmsis::util::common_prefix;
/// assert_eq!(common_prefix(["UART_RBR", "UART_IER", "UART_LCR"]), "UART_");
/// assert_eq!(common_prefix(["CTRL", "STAT"]), "");
/// assert_eq!(common_prefix(Vec::<&str>::new()), "");
/// ```
pub fn common_prefix<'a>(names: impl IntoIterator<Item = &'a str>) -> &'a str {
    let mut names = names.into_iter();
    let Some(first) = names.next() else {
        return "";
    };
    let (min, max) = names.fold((first, first), |(min, max), name| {
        (min.min(name), max.max(name))
    });

    for ((i, a), b) in min.char_indices().zip(max.chars()) {
        if a != b {
            return &min[..i];
        }
    }
    // `min` sorts first, so it can only be a prefix of `max`, never longer.
    min
}

/// Removes `prefix` from the start of a register name.
///
/// The name is kept whole when nothing would remain, so every field still
/// has an identifier. A remainder starting with a digit is returned as is
/// (`AD0DR0`, `AD0DR1` become `0`, `1`) and is not a valid C identifier;
/// such peripherals need their register names fixed up by hand.
///
/// # Examples
/// ```
/// use mcu_registers_generator_cmsis::util::strip_common_prefix;
/// assert_eq!(strip_common_prefix("UART_RBR", "UART_"), "RBR");
/// assert_eq!(strip_common_prefix("CTRL", "CTRL"), "CTRL");
/// assert_eq!(strip_common_prefix("CTRL", ""), "CTRL");
/// ```
pub fn strip_common_prefix<'a>(name: &'a str, prefix: &str) -> &'a str {
    if prefix.is_empty() {
        return name;
    }
    match name.split_once(prefix) {
        Some((_, rest)) if !rest.is_empty() => rest,
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefix_min_max() {
        // min = "CTRL", max = "CTRL_SET"; "CTRL" is a prefix of both.
        assert_eq!(common_prefix(["CTRL", "CTRL_SET", "CTRLCLR"]), "CTRL");
        assert_eq!(common_prefix(["SYSPLLCTRL", "SYSPLLSTAT", "SYSOSCCTRL"]), "SYS");
        assert_eq!(common_prefix(["GPIO0DATA", "GPIO0DIR", "GPIO0IS"]), "GPIO0");
    }

    #[test]
    fn test_common_prefix_single_name() {
        assert_eq!(common_prefix(["WDMOD"]), "WDMOD");
    }

    #[test]
    fn test_common_prefix_none() {
        assert_eq!(common_prefix(["RBR", "THR", "IER"]), "");
    }

    #[test]
    fn test_strip_common_prefix() {
        let prefix = common_prefix(["CTRL", "CTRL_SET", "CTRLCLR"]);
        assert_eq!(strip_common_prefix("CTRL_SET", prefix), "_SET");
        assert_eq!(strip_common_prefix("CTRLCLR", prefix), "CLR");
        // Nothing would be left, keep the whole name.
        assert_eq!(strip_common_prefix("CTRL", prefix), "CTRL");
    }

    #[test]
    fn test_strip_can_leave_leading_digit() {
        let prefix = common_prefix(["AD0DR0", "AD0DR1"]);
        assert_eq!(prefix, "AD0DR");
        assert_eq!(strip_common_prefix("AD0DR0", prefix), "0");
        assert_eq!(strip_common_prefix("AD0DR1", prefix), "1");
    }

    #[test]
    fn test_strip_keeps_everything_after_first_occurrence() {
        assert_eq!(strip_common_prefix("AB_AB_X", "AB"), "_AB_X");
    }
}
