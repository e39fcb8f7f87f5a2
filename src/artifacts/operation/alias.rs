use crate::artifacts::core::error::WrapperError;
use crate::artifacts::operation::subcommand::Subcommand;
use crate::artifacts::operation::{BUILTIN_ALIASES, Composite, Operation};
use crate::artifacts::spelling::{FrequencyTable, SpellCorrector};
use derive_new::new;
use std::collections::BTreeMap;

/// Resolves the subcommand token typed by the user
///
/// A user alias is applied first, then a built-in alias. Whatever comes out
/// must name a known subcommand or composite operation.
#[derive(Debug, new)]
pub struct AliasResolver<'a> {
    user_aliases: &'a BTreeMap<String, String>,
}

impl AliasResolver<'_> {
    pub fn resolve(&self, token: &str) -> Result<Operation, WrapperError> {
        let name = self
            .user_aliases
            .get(token)
            .map(String::as_str)
            .unwrap_or(token);
        let name = BUILTIN_ALIASES.get(name).copied().unwrap_or(name);

        match Operation::try_parse(name) {
            Some(operation) => {
                tracing::debug!(token, %operation, "resolved subcommand");
                Ok(operation)
            }
            None => Err(WrapperError::UnknownSubcommand {
                name: name.to_string(),
                suggestions: self.suggestions(name),
            }),
        }
    }

    fn suggestions(&self, name: &str) -> Vec<String> {
        let vocabulary = BUILTIN_ALIASES
            .keys()
            .copied()
            .chain(Subcommand::ALL.map(Subcommand::name))
            .chain(Composite::ALL.map(Composite::name))
            .map(str::to_string)
            .chain(self.user_aliases.keys().cloned());

        SpellCorrector::new(FrequencyTable::from_words(vocabulary))
            .correct(name)
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("st", Operation::Single(Subcommand::Status))]
    #[case("status", Operation::Single(Subcommand::Status))]
    #[case("praise", Operation::Single(Subcommand::Blame))]
    #[case("up", Operation::Single(Subcommand::Update))]
    #[case("upv", Operation::Composite(Composite::UpdateVerbose))]
    #[case("cix", Operation::Composite(Composite::CommitExtended))]
    fn builtin_aliases_resolve(#[case] token: &str, #[case] expected: Operation) {
        let user_aliases = BTreeMap::new();
        let resolver = AliasResolver::new(&user_aliases);

        assert_eq!(resolver.resolve(token).unwrap(), expected);
    }

    #[test]
    fn user_alias_is_applied_before_builtin_alias() {
        let user_aliases = BTreeMap::from([
            ("s".to_string(), "st".to_string()),
            ("lg".to_string(), "log".to_string()),
        ]);
        let resolver = AliasResolver::new(&user_aliases);

        assert_eq!(
            resolver.resolve("s").unwrap(),
            Operation::Single(Subcommand::Status)
        );
        assert_eq!(
            resolver.resolve("lg").unwrap(),
            Operation::Single(Subcommand::Log)
        );
    }

    #[test]
    fn unknown_token_reports_suggestions() {
        let user_aliases = BTreeMap::new();
        let resolver = AliasResolver::new(&user_aliases);

        match resolver.resolve("stauts") {
            Err(WrapperError::UnknownSubcommand { name, suggestions }) => {
                assert_eq!(name, "stauts");
                assert_eq!(suggestions, vec!["status".to_string()]);
            }
            other => panic!("expected unknown subcommand, got {other:?}"),
        }
    }

    #[test]
    fn user_alias_names_are_suggested() {
        let user_aliases = BTreeMap::from([("wip".to_string(), "commit".to_string())]);
        let resolver = AliasResolver::new(&user_aliases);

        match resolver.resolve("wop") {
            Err(WrapperError::UnknownSubcommand { suggestions, .. }) => {
                assert!(suggestions.contains(&"wip".to_string()));
            }
            other => panic!("expected unknown subcommand, got {other:?}"),
        }
    }

    #[test]
    fn alias_to_unknown_target_is_rejected() {
        let user_aliases = BTreeMap::from([("oops".to_string(), "frobnicate".to_string())]);
        let resolver = AliasResolver::new(&user_aliases);

        assert!(resolver.resolve("oops").is_err());
    }
}
