/// Writer module - renders structured values as SCSS literal expressions
pub mod ident;

pub use ident::is_valid_variable_name;

use crate::importer::error::ImportError;
use crate::language::values::Value;

/// Render a single value as an SCSS literal expression.
///
/// Every shape maps to a plain literal: no units are inferred for numbers and
/// no stylesheet-native types (colors, dimensions) are produced.
pub fn value_to_literal(value: &Value) -> Result<String, ImportError> {
    match value {
        Value::Null => Ok("null".to_string()),
        Value::Boolean(b) => Ok(b.to_string()),
        Value::Number(n) => {
            if !n.is_finite() {
                return Err(ImportError::UnsupportedValue(format!(
                    "non-finite number {}",
                    n
                )));
            }
            // Whole numbers render without a fractional part
            if n.fract() == 0.0 {
                Ok(format!("{:.0}", n))
            } else {
                Ok(format!("{}", n))
            }
        }
        Value::String(s) => Ok(quote_string(s)),
        Value::Array(items) => {
            let rendered: Vec<String> = items
                .iter()
                .map(value_to_literal)
                .collect::<Result<_, _>>()?;
            Ok(format!("[{}]", rendered.join(", ")))
        }
        Value::Map(map) => {
            let mut pairs = Vec::with_capacity(map.len());
            for (key, value) in map {
                pairs.push(format!("{}: {}", quote_string(key), value_to_literal(value)?));
            }
            Ok(format!("({})", pairs.join(", ")))
        }
    }
}

/// Assemble the full declaration body for a parsed file: one `$name: value;`
/// line per top-level key, in the file's own key order.
pub fn build_declarations(value: &Value) -> Result<String, ImportError> {
    let map = match value {
        Value::Map(map) => map,
        other => return Err(ImportError::InvalidTopLevelShape(other.type_name())),
    };

    let mut output = String::new();
    for (name, value) in map {
        if !is_valid_variable_name(name) {
            return Err(ImportError::InvalidVariableName(name.clone()));
        }
        output.push_str(&format!("${}: {};\n", name, value_to_literal(value)?));
    }

    Ok(output)
}

/// Quote a string as an SCSS string literal.
///
/// Backslashes must be escaped before quotes so the backslashes introduced by
/// quote escaping are not escaped a second time. Literal newlines become the
/// escaped-newline sequence `\a ` (SCSS strings cannot span lines).
pub fn quote_string(text: &str) -> String {
    let escaped = text
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\a ");
    format!("\"{}\"", escaped)
}
