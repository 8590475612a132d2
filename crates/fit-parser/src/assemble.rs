//! Pair translated keys with inferred values.

use fit_core::errors::SyntaxError;
use fit_core::ObjectDescriptor;

use crate::infer::infer;
use crate::keys::AliasTable;

/// Build a descriptor from `kind key value [key value ...]` tokens.
///
/// Duplicates are detected on canonical keys, so two spellings of the same
/// property collide.
///
/// # Errors
///
/// - [`SyntaxError::UnpairedKey`] for an even token count
/// - [`SyntaxError::InsufficientTokens`] for a lone kind token
/// - [`SyntaxError::DuplicateProperty`] for a repeated canonical key
/// - any value inference error
pub fn assemble(tokens: &[String], aliases: &AliasTable) -> Result<ObjectDescriptor, SyntaxError> {
    if tokens.len() % 2 == 0 {
        let key = tokens.last().cloned().unwrap_or_default();
        return Err(SyntaxError::UnpairedKey { key });
    }
    if tokens.len() < 3 {
        return Err(SyntaxError::InsufficientTokens {
            count: tokens.len(),
        });
    }

    let mut descriptor = ObjectDescriptor::new(tokens[0].as_str());
    for pair in tokens[1..].chunks_exact(2) {
        let (raw_key, raw_value) = (&pair[0], &pair[1]);
        let key = aliases.translate(raw_key);
        if descriptor.properties.contains_key(&key) {
            return Err(SyntaxError::DuplicateProperty {
                raw: raw_key.clone(),
                canonical: key,
            });
        }
        let value = infer(raw_value)?;
        tracing::trace!(key = %key, tag = %value.tag(), "inferred property");
        descriptor.properties.insert(key, value);
    }

    Ok(descriptor)
}
