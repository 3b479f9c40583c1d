/// Canonical genotype form: whitespace and separators dropped, uppercase, alleles sorted.
/// "ga", "G/A" and "AG" all become "AG".
pub fn normalize_genotype(raw: &str) -> String {
    let mut alleles: Vec<char> = raw
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '/' | '|' | '"'))
        .map(|c| c.to_ascii_uppercase())
        .collect();
    alleles.sort_unstable();
    alleles.into_iter().collect()
}

/// Vendor no-call markers. Expects a normalized genotype.
pub fn is_no_call(genotype: &str) -> bool {
    genotype.is_empty() || genotype == "--" || genotype == "00"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization_sorts_and_uppercases() {
        assert_eq!(normalize_genotype("ga"), "AG");
        assert_eq!(normalize_genotype(" G/A "), "AG");
        assert_eq!(normalize_genotype("TC"), "CT");
        assert_eq!(normalize_genotype("A"), "A");
        assert_eq!(normalize_genotype("A-"), "-A");
    }

    #[test]
    fn no_calls() {
        assert!(is_no_call("--"));
        assert!(is_no_call("00"));
        assert!(is_no_call(""));
        assert!(!is_no_call("-A"));
        assert!(!is_no_call("AA"));
    }
}
