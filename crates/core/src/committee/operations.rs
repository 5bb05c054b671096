use super::types::Committee;

/// Returns the special committees, keeping their relative order.
pub fn filter_special(committees: &[Committee]) -> Vec<Committee> {
    committees.iter().filter(|c| c.special).cloned().collect()
}
