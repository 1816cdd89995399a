//! Generates the C++ headers for the interpreter's expression syntax
//! tree: one self-contained class per grammar rule, plus the `Visitor`
//! interface the tree walkers implement.
//!
//! The grammar lives in [`grammar::GRAMMAR`]. The tool takes no
//! arguments and always regenerates every header. Output is flush-left;
//! the consuming build runs clang-format over it.

mod emit;
mod field;
mod grammar;

use heck::AsSnakeCase;
use std::path::Path;

// Relative to the interpreter's `src/` directory, where the tool runs.
const OUT_DIR: &str = "../include/syntax_tree";

fn main() {
    let out_dir = Path::new(OUT_DIR);
    std::fs::create_dir_all(out_dir).expect("failed to create output directory");

    for def in grammar::GRAMMAR {
        let unit = emit::node_unit(def)
            .unwrap_or_else(|err| panic!("invalid field in {}: {err}", def.class_name));
        let path = out_dir.join(format!("{}.h", AsSnakeCase(def.class_name)));
        std::fs::write(&path, unit).expect("failed to write header");
        println!("generated {}", path.display());
    }

    let names: Vec<&str> = grammar::GRAMMAR.iter().map(|def| def.class_name).collect();
    let path = out_dir.join("visitor_expr.h");
    std::fs::write(&path, emit::visitor_unit(&names)).expect("failed to write header");
    println!("generated {}", path.display());
}
