use heck::{ToKebabCase, ToPascalCase, ToSnakeCase, ToTitleCase};
use std::collections::HashMap;
use tera::{Tera, Value};

/// Case conversions exposed to templates as `{{ name | <filter> }}`.
const CASE_FILTERS: [(&str, fn(&str) -> String); 5] = [
    ("snake_case", |s| s.to_snake_case()),
    ("pascal_case", |s| s.to_pascal_case()),
    ("kebab_case", |s| s.to_kebab_case()),
    ("title_case", |s| s.to_title_case()),
    ("upper_case", str::to_uppercase),
];

/// Registers the case filters on `tera`. The filters accept
/// strings only.
pub fn register_filters(tera: &mut Tera) {
    for (name, convert) in CASE_FILTERS {
        tera.register_filter(name, move |value: &Value, _: &HashMap<String, Value>| {
            let text = value.as_str().ok_or_else(|| {
                tera::Error::msg(format!("filter `{name}` expects a string, got {value}"))
            })?;
            Ok(Value::String(convert(text)))
        });
    }
}
