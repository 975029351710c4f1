use super::ast::*;
use std::{fmt, fmt::Write};

/// Trait for printing AST Nodes to their canonical source text as a new String.
///
/// The canonical form is a single line: every run of whitespace or commas that a multi-line
/// printer would emit is reduced to a single space. Equal AST trees always print to the same
/// bytes, which makes the output suitable as a hashing input for persisted queries, e.g.
/// `query Foo($id: ID!) { node(id: $id) { id __typename } }`.
///
/// For convience when debugging, AST Nodes that implement `PrintNode` also automatically
/// implement the [`fmt::Display`] trait.
pub trait PrintNode {
    /// Write an AST node to a buffer implementing the [Write] trait.
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result;

    /// Print an AST Node to canonical source text as a String allocated on the heap.
    fn print(&self) -> String {
        let mut buf = String::new();
        match self.write_to_buffer(&mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}

impl fmt::Display for dyn PrintNode {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to_buffer(f)
    }
}

/// Writes `items` one after the other, separated by single spaces.
#[inline]
fn write_spaced<'n, T, I>(items: I, buffer: &mut dyn Write) -> fmt::Result
where
    T: PrintNode + 'n,
    I: IntoIterator<Item = &'n T>,
{
    let mut first = true;
    for item in items {
        if first {
            first = false;
        } else {
            buffer.write_char(' ')?;
        }
        item.write_to_buffer(buffer)?;
    }
    Ok(())
}

impl<'a> PrintNode for NamedType<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.name)
    }
}

impl<'a> PrintNode for Variable<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "${}", self.name)
    }
}

impl<'a> PrintNode for StringValue<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        // Block strings are printed quoted as well, so that line breaks never leak into the
        // single-line output
        buffer.write_char('"')?;
        for c in self.value.chars() {
            match c {
                '"' => buffer.write_str("\\\"")?,
                '\\' => buffer.write_str(r"\\")?,
                '\n' => buffer.write_str(r"\n")?,
                '\r' => buffer.write_str(r"\r")?,
                '\t' => buffer.write_str(r"\t")?,
                '\u{0008}' => buffer.write_str(r"\b")?,
                '\u{000C}' => buffer.write_str(r"\f")?,
                c if c.is_control() => write!(buffer, "\\u{:04X}", c as u32)?,
                c => buffer.write_char(c)?,
            }
        }
        buffer.write_char('"')
    }
}

impl<'a> PrintNode for Value<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Value::Variable(variable) => variable.write_to_buffer(buffer),
            Value::String(string) => string.write_to_buffer(buffer),
            Value::Float(FloatValue { value })
            | Value::Int(IntValue { value })
            | Value::Enum(EnumValue { value }) => buffer.write_str(value),
            Value::Boolean(BooleanValue { value: true }) => buffer.write_str("true"),
            Value::Boolean(BooleanValue { value: false }) => buffer.write_str("false"),
            Value::Null => buffer.write_str("null"),
            Value::List(list) => {
                buffer.write_char('[')?;
                write_spaced(list.children.iter(), buffer)?;
                buffer.write_char(']')
            }
            Value::Object(object) => {
                buffer.write_char('{')?;
                write_spaced(object.children.iter(), buffer)?;
                buffer.write_char('}')
            }
        }
    }
}

impl<'a> PrintNode for ObjectField<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}: ", self.name)?;
        self.value.write_to_buffer(buffer)
    }
}

impl<'a> PrintNode for Argument<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}: ", self.name)?;
        self.value.write_to_buffer(buffer)
    }
}

impl<'a> PrintNode for Arguments<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        buffer.write_char('(')?;
        write_spaced(self.children.iter(), buffer)?;
        buffer.write_char(')')
    }
}

impl<'a> PrintNode for Directive<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "@{}", self.name)?;
        self.arguments.write_to_buffer(buffer)
    }
}

impl<'a> PrintNode for Directives<'a> {
    /// Directives are printed with a leading space each, so that they can directly follow the
    /// node they're annotating.
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        for directive in self.children.iter() {
            buffer.write_char(' ')?;
            directive.write_to_buffer(buffer)?;
        }
        Ok(())
    }
}

impl<'a> PrintNode for SelectionSet<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        buffer.write_str("{ ")?;
        write_spaced(self.selections.iter(), buffer)?;
        buffer.write_str(" }")
    }
}

impl<'a> PrintNode for Selection<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Selection::Field(field) => field.write_to_buffer(buffer),
            Selection::FragmentSpread(spread) => spread.write_to_buffer(buffer),
            Selection::InlineFragment(fragment) => fragment.write_to_buffer(buffer),
        }
    }
}

impl<'a> PrintNode for Field<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        if let Some(alias) = self.alias {
            write!(buffer, "{}: {}", alias, self.name)?;
        } else {
            buffer.write_str(self.name)?;
        }
        self.arguments.write_to_buffer(buffer)?;
        self.directives.write_to_buffer(buffer)?;
        if !self.selection_set.is_empty() {
            buffer.write_char(' ')?;
            self.selection_set.write_to_buffer(buffer)?;
        }
        Ok(())
    }
}

impl<'a> PrintNode for FragmentSpread<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("...")?;
        self.name.write_to_buffer(buffer)?;
        self.directives.write_to_buffer(buffer)
    }
}

impl<'a> PrintNode for InlineFragment<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("...")?;
        if let Some(name) = &self.type_condition {
            buffer.write_str(" on ")?;
            name.write_to_buffer(buffer)?;
        }
        self.directives.write_to_buffer(buffer)?;
        buffer.write_char(' ')?;
        self.selection_set.write_to_buffer(buffer)
    }
}

impl<'a> PrintNode for Type<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Type::NamedType(name) => name.write_to_buffer(buffer),
            Type::ListType(inner) => {
                buffer.write_char('[')?;
                inner.write_to_buffer(buffer)?;
                buffer.write_char(']')
            }
            Type::NonNullType(inner) => {
                inner.write_to_buffer(buffer)?;
                buffer.write_char('!')
            }
        }
    }
}

impl<'a> PrintNode for VariableDefinition<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        self.variable.write_to_buffer(buffer)?;
        buffer.write_str(": ")?;
        self.of_type.write_to_buffer(buffer)?;
        if let Some(default_value) = &self.default_value {
            buffer.write_str(" = ")?;
            default_value.write_to_buffer(buffer)?;
        }
        self.directives.write_to_buffer(buffer)
    }
}

impl<'a> PrintNode for VariableDefinitions<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        if self.is_empty() {
            return Ok(());
        }
        buffer.write_char('(')?;
        write_spaced(self.children.iter(), buffer)?;
        buffer.write_char(')')
    }
}

impl<'a> PrintNode for FragmentDefinition<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("fragment ")?;
        self.name.write_to_buffer(buffer)?;
        buffer.write_str(" on ")?;
        self.type_condition.write_to_buffer(buffer)?;
        self.directives.write_to_buffer(buffer)?;
        buffer.write_char(' ')?;
        self.selection_set.write_to_buffer(buffer)
    }
}

impl<'a> PrintNode for OperationDefinition<'a> {
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        if self.operation == OperationKind::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty()
        {
            return self.selection_set.write_to_buffer(buffer);
        }

        buffer.write_str(match self.operation {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        })?;
        if let Some(name) = &self.name {
            buffer.write_char(' ')?;
            name.write_to_buffer(buffer)?;
        } else if !self.variable_definitions.is_empty() {
            buffer.write_char(' ')?;
        }
        self.variable_definitions.write_to_buffer(buffer)?;
        self.directives.write_to_buffer(buffer)?;
        buffer.write_char(' ')?;
        self.selection_set.write_to_buffer(buffer)
    }
}

impl<'a> PrintNode for Definition<'a> {
    #[inline]
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Definition::Operation(operation) => operation.write_to_buffer(buffer),
            Definition::Fragment(fragment) => fragment.write_to_buffer(buffer),
        }
    }
}

impl<'a> PrintNode for Document<'a> {
    /// Definitions without any selections can't be executed and are left out, so a document
    /// consisting only of those prints as an empty string.
    fn write_to_buffer(&self, buffer: &mut dyn Write) -> fmt::Result {
        write_spaced(
            self.definitions
                .iter()
                .filter(|definition| !definition.selection_set().is_empty()),
            buffer,
        )
    }
}

#[cfg(all(test, feature = "graphql-parser"))]
mod tests {
    use super::super::*;

    fn print_document(source: &str) -> String {
        let ctx = ASTContext::new();
        let parsed = graphql_parser::parse_query::<&str>(source).unwrap();
        let document = Document::from_graphql_parser(&ctx, &parsed).unwrap();
        document.print()
    }

    #[test]
    fn shorthand_query() {
        assert_eq!(print_document("{ field }"), "{ field }");
        assert_eq!(print_document("query { field }"), "{ field }");
        assert_eq!(print_document("query Name { field }"), "query Name { field }");
    }

    #[test]
    fn field() {
        assert_eq!(
            print_document("{ field { child { child } } }"),
            "{ field { child { child } } }"
        );
        assert_eq!(print_document("{ alias : field }"), "{ alias: field }");
        assert_eq!(
            print_document("{ field (test: true, other: 1) @test }"),
            "{ field(test: true other: 1) @test }"
        );
    }

    #[test]
    fn values() {
        assert_eq!(
            print_document("{ f(a: { b: [1, 2.5, ENUM], c: null, d: $var }, e: [], g: {}) }"),
            "{ f(a: {b: [1 2.5 ENUM] c: null d: $var} e: [] g: {}) }"
        );
    }

    #[test]
    fn strings() {
        assert_eq!(
            print_document(r#"{ f(a: "quote \" backslash \\ tab \t") }"#),
            r#"{ f(a: "quote \" backslash \\ tab \t") }"#
        );
        assert_eq!(
            print_document(r#"{ f(a: "\u0001") }"#),
            r#"{ f(a: "\u0001") }"#
        );
    }

    #[test]
    fn block_strings_stay_on_one_line() {
        let printed = print_document(indoc::indoc! {r#"
            {
              f(a: """
                first
                  second
              """)
            }
        "#});
        assert!(!printed.contains('\n'));
        assert!(printed.starts_with(r#"{ f(a: "first\n"#));
    }

    #[test]
    fn fragments() {
        assert_eq!(
            print_document("{ ...Frag @test ... on Type { a } ... @skip(if: true) { b } }"),
            "{ ...Frag @test ... on Type { a } ... @skip(if: true) { b } }"
        );
        assert_eq!(
            print_document("fragment Frag on Type @test { field }"),
            "fragment Frag on Type @test { field }"
        );
    }

    #[test]
    fn operation_definition() {
        assert_eq!(
            print_document("query Name ($var: String, $list: [Int!]! = [1]) @defer { field }"),
            "query Name($var: String $list: [Int!]! = [1]) @defer { field }"
        );
        assert_eq!(
            print_document("query ($var: String) { field }"),
            "query ($var: String) { field }"
        );
        assert_eq!(print_document("mutation { doThing }"), "mutation { doThing }");
        assert_eq!(
            print_document("subscription OnEvent { event { id } }"),
            "subscription OnEvent { event { id } }"
        );
    }

    #[test]
    fn multiple_definitions() {
        let printed = print_document(indoc::indoc! {"
            query Todos {
              todos {
                ...TodoFields
              }
            }

            fragment TodoFields on Todo {
              id
              text
            }
        "});
        assert_eq!(
            printed,
            "query Todos { todos { ...TodoFields } } fragment TodoFields on Todo { id text }"
        );
    }

    #[test]
    fn definitions_without_selections() {
        let ctx = ASTContext::new();
        let operation = OperationDefinition {
            operation: OperationKind::Query,
            name: Some("Empty".into()),
            variable_definitions: VariableDefinitions::default_in(&ctx.arena),
            directives: Directives::default_in(&ctx.arena),
            selection_set: SelectionSet::default_in(&ctx.arena),
        };
        let mut document = Document::default_in(&ctx.arena);
        document.definitions.push(operation.into());
        assert_eq!(document.print(), "");
    }
}
