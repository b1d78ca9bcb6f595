use std::fmt;

/// Member identity, the lowercased member name.
#[derive(PartialOrd, Ord, PartialEq, Eq, Hash, Clone, Debug)]
pub struct MemberId(String);

impl MemberId {
    pub fn new(name: &str) -> Self {
        Self(name.to_lowercase())
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_insensitive() {
        assert_eq!(MemberId::new("Steve"), MemberId::new("sTEVE"));
        assert_eq!(MemberId::new("Steve").to_string(), "steve");
    }
}
