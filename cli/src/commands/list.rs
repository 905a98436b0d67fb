use crate::commands::shared::{CollectionArgs, OutputArgs, SourceArgs};
use crate::core::formatter::get_formatter;
use clap::Args;
use courier_lib::{placeholders, Collection, Item};
use serde::Serialize;
use std::path::Path;

#[derive(Serialize)]
pub struct ItemView {
    pub collection: String,
    pub name: String,
    pub method: String,
    pub url: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variables: Vec<String>,
}

#[derive(Debug, Args)]
#[command(about = "List the items of one or more collections")]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub collections: CollectionArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_list(args: &ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let dir = Path::new(&args.source.source);
    let mut items = Vec::new();

    for file in &args.collections.collections {
        let collection = Collection::from_path(dir.join(file))?;
        items.extend(
            collection
                .items
                .iter()
                .map(|item| item_view(collection.name(), item)),
        );
    }

    let formatter = get_formatter(&args.output.output);
    println!(
        "{}",
        formatter.format_list(&items, "Items found:", "No items found")
    );
    Ok(())
}

fn item_view(collection: &str, item: &Item) -> ItemView {
    let method = if item.request.method.is_empty() {
        "GET".to_string()
    } else {
        item.request.method.to_uppercase()
    };

    ItemView {
        collection: collection.to_string(),
        name: item.name.clone(),
        method,
        url: item.request.url.raw.clone(),
        variables: referenced_variables(item),
    }
}

/// Variable names used anywhere in the item, in first-seen order.
/// Templates that do not parse contribute nothing.
fn referenced_variables(item: &Item) -> Vec<String> {
    let request = &item.request;
    let templates = std::iter::once(request.url.raw.as_str())
        .chain(
            request
                .headers
                .iter()
                .flat_map(|h| [h.key.as_str(), h.value.as_str()]),
        )
        .chain(request.body.iter().map(|b| b.raw.as_str()))
        .chain(item.responses.iter().map(|r| r.raw.as_str()));

    let mut names: Vec<String> = Vec::new();
    for template in templates {
        for name in placeholders(template).unwrap_or_default() {
            if !names.iter().any(|n| n == name) {
                names.push(name.to_string());
            }
        }
    }
    names
}
