//! Placeholder baking: turns CTC messages into runtime-ready messages.
//!
//! Every `$NAME$` token in a message is replaced by the `content` of the
//! placeholder declared under `NAME`. Declarations and tokens must match
//! one-to-one: a declared placeholder that is never used, or a token left
//! without a declaration, fails the whole catalog.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::catalog::{BakedMessage, Catalog, CtcMessage};
use crate::constants::TOKEN_PATTERN;
use crate::error::{BakerError, BakerResult};

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TOKEN_PATTERN).expect("token pattern is valid"));

/// Bakes a whole catalog.
///
/// Messages are processed in catalog order and the first malformed one
/// aborts the call, so the reported error is deterministic for a given
/// input. The output has exactly the keys of the input.
///
/// # Arguments
/// * `catalog` - Messages in CTC form, keyed by message id
///
/// # Returns
/// * `BakerResult<Catalog<BakedMessage>>` - Baked messages under the same keys
///
/// # Errors
/// * `BakerError::UnusedPlaceholder` if a declared placeholder is absent from its message
/// * `BakerError::UnresolvedPlaceholder` if a message keeps undeclared tokens
pub fn bake(catalog: &Catalog<CtcMessage>) -> BakerResult<Catalog<BakedMessage>> {
    let mut baked = Catalog::with_capacity(catalog.len());
    for (key, definition) in catalog {
        baked.insert(key.clone(), bake_message(key, definition)?);
    }
    Ok(baked)
}

/// Bakes a single message. `key` is only used for error context.
pub fn bake_message(key: &str, definition: &CtcMessage) -> BakerResult<BakedMessage> {
    let mut message = definition.message.clone();

    if let Some(placeholders) = &definition.placeholders {
        for (name, placeholder) in placeholders {
            let token = format!("${name}$");
            if !message.contains(&token) {
                return Err(BakerError::UnusedPlaceholder {
                    key: key.to_string(),
                    placeholder: name.clone(),
                    message,
                });
            }
            // Plural and select branches repeat the same token.
            message = message.replace(&token, &placeholder.content);
        }
    }

    let leftover = find_unresolved_tokens(&message);
    if !leftover.is_empty() {
        return Err(BakerError::UnresolvedPlaceholder {
            key: key.to_string(),
            tokens: leftover,
            message,
        });
    }

    debug!("Baked '{}'", key);
    Ok(BakedMessage { message })
}

/// Returns every `$NAME$` token in `text`, left to right, duplicates included.
pub fn find_unresolved_tokens(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_unresolved_tokens() {
        assert!(find_unresolved_tokens("plain text").is_empty());
        assert!(find_unresolved_tokens("costs $ 5 or $$").is_empty());
        assert_eq!(
            find_unresolved_tokens("$A$ and $B_2$ and $A$"),
            vec!["$A$", "$B_2$", "$A$"]
        );
    }

    #[test]
    fn test_token_name_is_ascii_word() {
        assert!(find_unresolved_tokens("$NAME-1$").is_empty());
        assert!(find_unresolved_tokens("$ÜBER$").is_empty());
        assert_eq!(find_unresolved_tokens("$$NAME$$"), vec!["$NAME$"]);
    }

    #[test]
    fn test_content_is_not_rescanned() {
        let msg = CtcMessage::new("Pay $AMOUNT$").with_placeholder("AMOUNT", "{price}");
        let baked = bake_message("k", &msg).unwrap();
        assert_eq!(baked.message, "Pay {price}");

        // Content shaped like a token is inserted literally and then caught
        // by the completeness check.
        let msg = CtcMessage::new("Pay $AMOUNT$").with_placeholder("AMOUNT", "$OTHER$");
        match bake_message("k", &msg) {
            Err(BakerError::UnresolvedPlaceholder { tokens, .. }) => {
                assert_eq!(tokens, vec!["$OTHER$"])
            }
            other => panic!("Expected UnresolvedPlaceholder, got {:?}", other),
        }
    }

    #[test]
    fn test_replacement_is_literal() {
        let msg = CtcMessage::new("Value: $V$").with_placeholder("V", "$1 ${x}");
        let baked = bake_message("k", &msg).unwrap();
        assert_eq!(baked.message, "Value: $1 ${x}");
    }

    #[test]
    fn test_empty_placeholder_map() {
        let mut msg = CtcMessage::new("Nothing to do");
        msg.placeholders = Some(Default::default());
        assert_eq!(bake_message("k", &msg).unwrap().message, "Nothing to do");
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let msg = CtcMessage::new("Open $url$").with_placeholder("URL", "{url}");
        match bake_message("k", &msg) {
            Err(BakerError::UnusedPlaceholder { placeholder, .. }) => {
                assert_eq!(placeholder, "URL")
            }
            other => panic!("Expected UnusedPlaceholder, got {:?}", other),
        }
    }
}
