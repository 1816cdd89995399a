//! Produces the text of the generated headers. Both emitters are pure
//! functions of their input, so regenerating over an unchanged grammar
//! overwrites every file with identical bytes.

use crate::field::{FieldSpec, FieldSpecError};
use crate::grammar::NodeDef;
use heck::AsShoutySnakeCase;
use std::fmt::Write as _;

macro_rules! ln {
    ($f:ident, $($tt:tt)*) => (writeln!($f, $($tt)*).unwrap());
    ($f:ident) => (writeln!($f).unwrap());
}

macro_rules! w {
    ($f:ident, $($tt:tt)*) => (write!($f, $($tt)*).unwrap());
}

macro_rules! ml {
    ($f:ident, $($tt:tt)*) => (indoc::writedoc!($f, $($tt)*).unwrap());
}

/// One self-contained node class header.
pub fn node_unit(def: &NodeDef) -> Result<String, FieldSpecError> {
    let fields = def
        .fields
        .iter()
        .map(|spec| FieldSpec::parse(spec))
        .collect::<Result<Vec<_>, _>>()?;

    let mut out = String::new();

    let guard = AsShoutySnakeCase(def.class_name);
    ml!(
        out,
        "
        #ifndef {guard}_H
        #define {guard}_H

        "
    );

    for inc in def.includes {
        ln!(out, "#include \"{inc}.h\"");
    }
    ln!(out);

    ln!(out, "namespace cpplox::ast");
    ln!(out, "{{");
    ln!(out, "class {} : public {}", def.class_name, def.base_class);
    ln!(out, "{{");
    ln!(out, "public:");

    // Children are passed through pointers so any node subtype
    // substitutes; the leaf value holder takes its value directly.
    let params: Vec<String> = fields
        .iter()
        .map(|field| {
            if def.by_value {
                format!("{} {}", field.ty, field.name)
            } else {
                format!("{}* {}", field.ty, field.name)
            }
        })
        .collect();
    ln!(out, "{}({})", def.class_name, params.join(", "));

    // Every argument is wrapped in shared ownership, so the constructing
    // context may keep its own handle to a child and node objects can be
    // destroyed in any order.
    let inits: Vec<String> = fields
        .iter()
        .map(|field| format!("m_{0}(std::make_shared<{1}>({0}))", field.name, field.ty))
        .collect();
    ln!(out, ": {}", inits.join(", "));
    ln!(out, "{{}}");
    ln!(out);

    ml!(
        out,
        "
        Value accept(Visitor* visitor) override
        {{
        return visitor->visit(this);
        }}

        "
    );

    for field in &fields {
        ln!(out, "std::shared_ptr<{}> m_{};", field.ty, field.name);
    }
    ln!(out, "}};");
    ln!(out);
    ln!(out, "}}");
    w!(out, "#endif // {guard}_H");

    Ok(out)
}

/// The visitor interface header, over the ordered list of node class
/// names. Knows nothing about fields.
pub fn visitor_unit(class_names: &[&str]) -> String {
    let mut out = String::new();

    ml!(
        out,
        r#"
        #ifndef VISITOR_H
        #define VISITOR_H

        #include "value.h"

        namespace cpplox::ast
        {{

        "#
    );

    for name in class_names {
        ln!(out, "class {name};");
    }
    ln!(out);

    ln!(out, "class Visitor");
    ln!(out, "{{");
    ln!(out, "public:");
    for name in class_names {
        ln!(out, "virtual Value visit({name}* expr) = 0;");
    }
    ml!(
        out,
        "
        }};
        }}

        #endif // VISITOR_H
        "
    );

    out
}
