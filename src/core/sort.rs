use crate::domain::ports::Resource;

/// Returns a copy of `resources` ordered by canonical form. The input is
/// left as it was.
pub fn sort_by_canonical_form<R: Resource + Clone>(resources: &[R]) -> Vec<R> {
    let mut sorted = resources.to_vec();
    sorted.sort_by_cached_key(|r| r.canonical_form());
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RecordShape;

    #[derive(Debug, Clone, PartialEq)]
    struct Named(&'static str, &'static str);

    impl Resource for Named {
        fn kind(&self) -> &str {
            self.0
        }

        fn name(&self) -> &str {
            self.1
        }

        fn shape(&self) -> RecordShape {
            RecordShape::new("Named")
        }
    }

    #[test]
    fn test_sort_orders_by_kind_then_name() {
        let input = vec![Named("noop", "b"), Named("file", "z"), Named("noop", "a")];
        let sorted = sort_by_canonical_form(&input);
        assert_eq!(
            sorted,
            vec![Named("file", "z"), Named("noop", "a"), Named("noop", "b")]
        );
        assert_eq!(input[0], Named("noop", "b"));
    }

    #[test]
    fn test_sort_is_bytewise() {
        let input = vec![Named("x", "b"), Named("x", "B"), Named("x", "a")];
        let forms: Vec<String> = sort_by_canonical_form(&input)
            .iter()
            .map(|r| r.canonical_form())
            .collect();
        assert_eq!(forms, vec!["x[B]", "x[a]", "x[b]"]);
    }

    #[test]
    fn test_sort_empty() {
        let input: Vec<Named> = Vec::new();
        assert!(sort_by_canonical_form(&input).is_empty());
    }
}
