//! Renderer: `GeneratedComponentSpec` -> React component source.
//!
//! Plain string building. Names are inserted verbatim; a name that is not a
//! valid TypeScript identifier produces invalid output.

use crate::extract::GeneratedComponentSpec;

const INDENT: &str = "  ";

/// Render the `.tsx` source for `spec`.
///
/// The output depends only on `spec`, so equal inputs render byte-identical
/// files.
pub fn render_component(spec: &GeneratedComponentSpec) -> String {
    let name = &spec.component_name;
    let mut out = String::new();

    out.push_str("import React from 'react';\n");
    out.push_str(&format!("import './{name}.css';\n"));
    out.push('\n');

    out.push_str(&format!("export interface {name}Props {{\n"));
    for property in &spec.properties {
        out.push_str(&format!(
            "{INDENT}{}?: {};\n",
            property.name,
            property.kind.ts_type()
        ));
    }
    out.push_str(&format!("{INDENT}children?: React.ReactNode;\n"));
    out.push_str("}\n");
    out.push('\n');

    out.push_str(&format!(
        "export const {name}: React.FC<{name}Props> = ({{\n"
    ));
    if !spec.properties.is_empty() {
        let names: Vec<&str> = spec.properties.iter().map(|p| p.name.as_str()).collect();
        out.push_str(&format!("{INDENT}{},\n", names.join(", ")));
    }
    out.push_str(&format!("{INDENT}children,\n"));
    out.push_str(&format!("{INDENT}...props\n"));
    out.push_str("}) => {\n");
    out.push_str(&format!("{INDENT}return (\n"));
    out.push_str(&format!(
        "{INDENT}{INDENT}<div className=\"{}\" {{...props}}>\n",
        spec.class_name()
    ));
    out.push_str(&format!("{INDENT}{INDENT}{INDENT}{{children}}\n"));
    out.push_str(&format!("{INDENT}{INDENT}</div>\n"));
    out.push_str(&format!("{INDENT});\n"));
    out.push_str("};\n");

    out
}
