/// Status of an operation outcome. Fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Status {
    Failed = 0,
    Succeed = 1,
}

impl Status {
    pub fn is_success(self) -> bool {
        matches!(self, Self::Succeed)
    }

    pub fn is_failure(self) -> bool {
        matches!(self, Self::Failed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Failed => "Failed",
            Self::Succeed => "Succeed",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discriminants_are_stable() {
        assert_eq!(Status::Failed as u8, 0);
        assert_eq!(Status::Succeed as u8, 1);
    }

    #[test]
    fn serializes_as_variant_name() {
        assert_eq!(
            serde_json::to_string(&Status::Succeed).unwrap(),
            "\"Succeed\""
        );
        let back: Status = serde_json::from_str("\"Failed\"").unwrap();
        assert_eq!(back, Status::Failed);
    }

    #[test]
    fn exactly_one_predicate_holds() {
        for status in [Status::Failed, Status::Succeed] {
            assert_ne!(status.is_success(), status.is_failure());
        }
    }
}
