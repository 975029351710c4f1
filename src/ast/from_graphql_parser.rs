//! Conversion from documents that were parsed by the [`graphql_parser`] crate.
//!
//! Host pipelines hand this crate documents they have already parsed. When that parser is
//! `graphql_parser`, its query AST is copied onto an [`ASTContext`]'s arena here.

use super::ast::*;
use crate::error::{Error, ErrorType, Result};
use bumpalo::collections::Vec;
use graphql_parser::query as parsed;
use graphql_parser::query::Text;

impl<'a> Document<'a> {
    /// Converts a document parsed by `graphql_parser` into an AST allocated on `ctx`.
    ///
    /// Shorthand `{ ... }` operations become anonymous queries. Object values keep the field order
    /// the parser stores them in, which is sorted by key. `graphql_parser` only keeps the value of
    /// a float literal, so floats are printed in their shortest form that still reads as a float,
    /// and literals that overflowed to an infinite value are rejected.
    pub fn from_graphql_parser<'p, T: Text<'p>>(
        ctx: &'a ASTContext,
        document: &parsed::Document<'p, T>,
    ) -> Result<Document<'a>> {
        let convert = Converter { ctx };
        Ok(Document {
            definitions: convert.list(&document.definitions, |definition| {
                convert.definition(definition)
            })?,
        })
    }
}

struct Converter<'a> {
    ctx: &'a ASTContext,
}

impl<'a> Converter<'a> {
    #[inline]
    fn name<S: AsRef<str>>(&self, name: &S) -> &'a str {
        self.ctx.alloc_str(name.as_ref())
    }

    fn list<'i, I: 'i, O, F>(&self, items: &'i [I], mut convert: F) -> Result<Vec<'a, O>>
    where
        F: FnMut(&'i I) -> Result<O>,
    {
        let mut list = Vec::with_capacity_in(items.len(), &self.ctx.arena);
        for item in items {
            list.push(convert(item)?);
        }
        Ok(list)
    }

    fn definition<'p, T: Text<'p>>(
        &self,
        definition: &parsed::Definition<'p, T>,
    ) -> Result<Definition<'a>> {
        Ok(match definition {
            parsed::Definition::Operation(operation) => self.operation(operation)?.into(),
            parsed::Definition::Fragment(fragment) => FragmentDefinition {
                name: self.name(&fragment.name).into(),
                type_condition: self.type_condition(&fragment.type_condition),
                directives: self.directives(&fragment.directives)?,
                selection_set: self.selection_set(&fragment.selection_set)?,
            }
            .into(),
        })
    }

    fn operation<'p, T: Text<'p>>(
        &self,
        operation: &parsed::OperationDefinition<'p, T>,
    ) -> Result<OperationDefinition<'a>> {
        let (operation, name, variable_definitions, directives, selection_set) = match operation {
            parsed::OperationDefinition::SelectionSet(selection_set) => {
                return Ok(OperationDefinition {
                    operation: OperationKind::Query,
                    name: None,
                    variable_definitions: VariableDefinitions::default_in(&self.ctx.arena),
                    directives: Directives::default_in(&self.ctx.arena),
                    selection_set: self.selection_set(selection_set)?,
                });
            }
            parsed::OperationDefinition::Query(query) => (
                OperationKind::Query,
                &query.name,
                &query.variable_definitions,
                &query.directives,
                &query.selection_set,
            ),
            parsed::OperationDefinition::Mutation(mutation) => (
                OperationKind::Mutation,
                &mutation.name,
                &mutation.variable_definitions,
                &mutation.directives,
                &mutation.selection_set,
            ),
            parsed::OperationDefinition::Subscription(subscription) => (
                OperationKind::Subscription,
                &subscription.name,
                &subscription.variable_definitions,
                &subscription.directives,
                &subscription.selection_set,
            ),
        };

        Ok(OperationDefinition {
            operation,
            name: name.as_ref().map(|name| self.name(name).into()),
            variable_definitions: VariableDefinitions {
                children: self.list(variable_definitions, |var_def| {
                    self.variable_definition(var_def)
                })?,
            },
            directives: self.directives(directives)?,
            selection_set: self.selection_set(selection_set)?,
        })
    }

    fn variable_definition<'p, T: Text<'p>>(
        &self,
        var_def: &parsed::VariableDefinition<'p, T>,
    ) -> Result<VariableDefinition<'a>> {
        Ok(VariableDefinition {
            variable: self.name(&var_def.name).into(),
            of_type: self.of_type(&var_def.var_type),
            default_value: var_def
                .default_value
                .as_ref()
                .map(|value| self.value(value))
                .transpose()?,
            directives: Directives::default_in(&self.ctx.arena),
        })
    }

    fn of_type<'p, T: Text<'p>>(&self, of_type: &parsed::Type<'p, T>) -> Type<'a> {
        match of_type {
            parsed::Type::NamedType(name) => Type::NamedType(self.name(name).into()),
            parsed::Type::ListType(inner) => self.of_type(&**inner).into_list(self.ctx),
            parsed::Type::NonNullType(inner) => self.of_type(&**inner).into_nonnull(self.ctx),
        }
    }

    fn type_condition<'p, T: Text<'p>>(
        &self,
        condition: &parsed::TypeCondition<'p, T>,
    ) -> NamedType<'a> {
        let parsed::TypeCondition::On(name) = condition;
        self.name(name).into()
    }

    fn selection_set<'p, T: Text<'p>>(
        &self,
        selection_set: &parsed::SelectionSet<'p, T>,
    ) -> Result<SelectionSet<'a>> {
        Ok(SelectionSet {
            selections: self.list(&selection_set.items, |selection| self.selection(selection))?,
        })
    }

    fn selection<'p, T: Text<'p>>(
        &self,
        selection: &parsed::Selection<'p, T>,
    ) -> Result<Selection<'a>> {
        Ok(match selection {
            parsed::Selection::Field(field) => Field {
                alias: field.alias.as_ref().map(|alias| self.name(alias)),
                name: self.name(&field.name),
                arguments: self.arguments(&field.arguments)?,
                directives: self.directives(&field.directives)?,
                selection_set: self.selection_set(&field.selection_set)?,
            }
            .into(),
            parsed::Selection::FragmentSpread(spread) => FragmentSpread {
                name: self.name(&spread.fragment_name).into(),
                directives: self.directives(&spread.directives)?,
            }
            .into(),
            parsed::Selection::InlineFragment(fragment) => InlineFragment {
                type_condition: fragment
                    .type_condition
                    .as_ref()
                    .map(|condition| self.type_condition(condition)),
                directives: self.directives(&fragment.directives)?,
                selection_set: self.selection_set(&fragment.selection_set)?,
            }
            .into(),
        })
    }

    fn directives<'p, T: Text<'p>>(
        &self,
        directives: &[parsed::Directive<'p, T>],
    ) -> Result<Directives<'a>> {
        Ok(Directives {
            children: self.list(directives, |directive| {
                Ok(Directive {
                    name: self.name(&directive.name),
                    arguments: self.arguments(&directive.arguments)?,
                })
            })?,
        })
    }

    fn arguments<'p, T: Text<'p>>(
        &self,
        arguments: &[(T::Value, parsed::Value<'p, T>)],
    ) -> Result<Arguments<'a>> {
        Ok(Arguments {
            children: self.list(arguments, |(name, value)| {
                Ok(Argument {
                    name: self.name(name),
                    value: self.value(value)?,
                })
            })?,
        })
    }

    fn value<'p, T: Text<'p>>(&self, value: &parsed::Value<'p, T>) -> Result<Value<'a>> {
        Ok(match value {
            parsed::Value::Variable(name) => Value::Variable(self.name(name).into()),
            parsed::Value::Int(number) => {
                let number = number.as_i64().ok_or_else(|| {
                    Error::new("Int value doesn't fit into 64 bits", Some(ErrorType::Transform))
                })?;
                Value::Int(IntValue {
                    value: self.ctx.alloc_string(number.to_string()),
                })
            }
            parsed::Value::Float(float) if !float.is_finite() => {
                return Err(Error::new_with_context(
                    "Float value is out of range".to_string(),
                    format!("{:?}", float),
                    Some(ErrorType::Transform),
                ));
            }
            // `Debug` keeps the fractional part of whole numbers, e.g. `1.0`
            parsed::Value::Float(float) => Value::Float(FloatValue {
                value: self.ctx.alloc_string(format!("{:?}", float)),
            }),
            parsed::Value::String(string) => Value::String(StringValue::new(self.ctx, string)),
            parsed::Value::Boolean(boolean) => Value::Boolean((*boolean).into()),
            parsed::Value::Null => Value::Null,
            parsed::Value::Enum(name) => Value::Enum(EnumValue {
                value: self.name(name),
            }),
            parsed::Value::List(list) => Value::List(ListValue {
                children: self.list(list, |value| self.value(value))?,
            }),
            parsed::Value::Object(object) => {
                let mut children = Vec::with_capacity_in(object.len(), &self.ctx.arena);
                for (name, value) in object.iter() {
                    children.push(ObjectField {
                        name: self.name(name),
                        value: self.value(value)?,
                    });
                }
                Value::Object(ObjectValue { children })
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::PrintNode;

    fn print_document(source: &str) -> String {
        let ctx = ASTContext::new();
        let parsed = graphql_parser::parse_query::<&str>(source).unwrap();
        let document = Document::from_graphql_parser(&ctx, &parsed).unwrap();
        document.print()
    }

    #[test]
    fn converts_operations() {
        let ctx = ASTContext::new();
        let parsed = graphql_parser::parse_query::<String>(
            "mutation Like($id: ID!) { like(id: $id) { likes } } { viewer { id } }",
        )
        .unwrap();
        let document = Document::from_graphql_parser(&ctx, &parsed).unwrap();

        let operations = document.operations().collect::<std::vec::Vec<_>>();
        assert_eq!(operations.len(), 2);
        assert_eq!(operations[0].operation, OperationKind::Mutation);
        assert_eq!(operations[0].name, Some(NamedType { name: "Like" }));
        assert_eq!(
            operations[0].variable_definitions.children[0].of_type,
            Type::NonNullType(&Type::NamedType(NamedType { name: "ID" }))
        );
        assert_eq!(operations[1].operation, OperationKind::Query);
        assert_eq!(operations[1].name, None);
    }

    #[test]
    fn converts_fragments() {
        let ctx = ASTContext::new();
        let parsed = graphql_parser::parse_query::<&str>(
            "fragment UserFields on User @dir { id ... on Admin { role } ...Other }",
        )
        .unwrap();
        let document = Document::from_graphql_parser(&ctx, &parsed).unwrap();

        match &document.definitions[0] {
            Definition::Fragment(fragment) => {
                assert_eq!(fragment.name.name, "UserFields");
                assert_eq!(fragment.type_condition.name, "User");
                assert_eq!(fragment.directives.children[0].name, "dir");
                assert_eq!(fragment.selection_set.selections.len(), 3);
            }
            definition => panic!("expected a fragment, got {:?}", definition),
        }
    }

    #[test]
    fn converts_values() {
        assert_eq!(
            print_document(
                r#"query ($v: Int = 3) { f(a: -12, b: 1.5, k: 2.0, c: "s", d: false, e: null, g: RED, h: [$v]) }"#
            ),
            r#"query ($v: Int = 3) { f(a: -12 b: 1.5 k: 2.0 c: "s" d: false e: null g: RED h: [$v]) }"#
        );
    }

    #[test]
    fn keeps_explicit_null_defaults() {
        let ctx = ASTContext::new();
        let parsed =
            graphql_parser::parse_query::<&str>("query Q($a: Int = null, $b: Int) { f(a: $a b: $b) }")
                .unwrap();
        let document = Document::from_graphql_parser(&ctx, &parsed).unwrap();
        let operation = document.operations().next().unwrap();
        assert_eq!(
            operation.variable_definitions.children[0].default_value,
            Some(Value::Null)
        );
        assert_eq!(operation.variable_definitions.children[1].default_value, None);
        assert_eq!(
            document.print(),
            "query Q($a: Int = null $b: Int) { f(a: $a b: $b) }"
        );
        assert_ne!(
            print_document("query Q($a: Int = null) { f(a: $a) }"),
            print_document("query Q($a: Int) { f(a: $a) }")
        );
    }

    #[test]
    fn floats_print_as_floats() {
        assert_eq!(
            print_document("{ f(a: 1E3, b: 1.50, c: -0.25, d: 1e300) }"),
            "{ f(a: 1000.0 b: 1.5 c: -0.25 d: 1e300) }"
        );
    }

    #[test]
    fn rejects_infinite_floats() {
        let ctx = ASTContext::new();
        let parsed = graphql_parser::parse_query::<&str>("query Q { f(a: 1e400) }").unwrap();
        let err = Document::from_graphql_parser(&ctx, &parsed).unwrap_err();
        assert_eq!(err.error_type(), ErrorType::Transform);
        assert_eq!(err.print(true), "Transform Error: Float value is out of range\ninf");
    }

    #[test]
    fn object_fields_are_sorted_by_key() {
        // graphql_parser stores object values in a BTreeMap, so source order isn't preserved
        assert_eq!(
            print_document("{ f(a: {b: 1, a: 2, c: {z: true, y: false}}) }"),
            "{ f(a: {a: 2 b: 1 c: {y: false z: true}}) }"
        );
    }
}
