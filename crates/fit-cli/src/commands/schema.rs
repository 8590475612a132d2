use anyhow::{Context, bail};
use fit_parser::AliasTable;
use fit_schema::{RecordSchemas, SchemaRegistry};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;
use crate::views::{KindView, SchemaIndex};

/// Handle `fittrack schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();

    if let Some(name) = &args.json {
        let schemas = RecordSchemas::builtin();
        let schema = schemas.document(name).with_context(|| {
            format!(
                "unknown JSON Schema '{name}' (available: {})",
                schemas.names().collect::<Vec<_>>().join(", ")
            )
        })?;
        return output(&mut out, schema, flags.format);
    }

    let registry = SchemaRegistry::builtin();
    let aliases = AliasTable::standard();

    match &args.kind {
        Some(kind) => {
            let Some(schema) = registry.get(kind) else {
                let known: Vec<&str> = registry.kinds().iter().map(|k| k.as_str()).collect();
                bail!("unknown record kind '{kind}' (known: {})", known.join(", "));
            };
            output(&mut out, &KindView::new(schema, aliases), flags.format)
        }
        None => {
            let index = SchemaIndex {
                kinds: KindView::all(registry, aliases),
                json_schemas: RecordSchemas::builtin().names().collect(),
            };
            output(&mut out, &index, flags.format)
        }
    }
}
