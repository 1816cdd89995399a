/// One node class of the expression grammar.
#[derive(Debug, Clone, Copy)]
pub struct NodeDef {
    pub class_name: &'static str,
    pub base_class: &'static str,
    /// Headers included by the generated unit, without the `.h` suffix.
    pub includes: &'static [&'static str],
    /// Compact `"Type name"` specs, in constructor/declaration order.
    pub fields: &'static [&'static str],
    /// The leaf value holder takes its constructor argument by value
    /// instead of through a pointer; it never appears as a child subtree.
    pub by_value: bool,
}

/// The expression grammar. Table order is emission order, and the order
/// of the forward declarations and `visit` overloads in the visitor unit.
pub const GRAMMAR: &[NodeDef] = &[
    NodeDef {
        class_name: "Binary",
        base_class: "Expression",
        includes: &["expression", "token"],
        fields: &["Expression left", "cpplox::Token op", "Expression right"],
        by_value: false,
    },
    NodeDef {
        class_name: "Grouping",
        base_class: "Expression",
        includes: &["expression"],
        fields: &["Expression expression"],
        by_value: false,
    },
    NodeDef {
        class_name: "Unary",
        base_class: "Expression",
        includes: &["expression"],
        fields: &["cpplox::Token op", "Expression right"],
        by_value: false,
    },
    NodeDef {
        class_name: "Literal",
        base_class: "Expression",
        includes: &["expression", "../literal"],
        fields: &["cpplox::Literal value"],
        by_value: true,
    },
];
