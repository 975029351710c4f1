use super::ast::*;
use bumpalo::collections::{vec::IntoIter, CollectIn, Vec};

/// Creates an empty instance of a list node on a given arena.
pub trait DefaultIn<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self;
}

/// Creates a deep copy of a node whose lists are all allocated on a given arena.
///
/// `Clone` copies a list into the arena the original list was allocated on. Names and other
/// string slices are shared with the original instead of being copied.
pub trait CloneIn<'a> {
    fn clone_in(&self, arena: &'a bumpalo::Bump) -> Self;
}

macro_rules! list_node {
    ($($node:ident { $field:ident: $item:ident }),+ $(,)?) => {
        $(
            impl<'a> IntoIterator for $node<'a> {
                type Item = $item<'a>;
                type IntoIter = IntoIter<'a, $item<'a>>;
                #[inline]
                fn into_iter(self) -> Self::IntoIter {
                    self.$field.into_iter()
                }
            }

            impl<'a> DefaultIn<'a> for $node<'a> {
                #[inline]
                fn default_in(arena: &'a bumpalo::Bump) -> Self {
                    $node {
                        $field: Vec::new_in(arena),
                    }
                }
            }
        )+
    };
}

list_node!(
    ListValue { children: Value },
    ObjectValue { children: ObjectField },
    Arguments { children: Argument },
    Directives { children: Directive },
    VariableDefinitions { children: VariableDefinition },
    SelectionSet { selections: Selection },
    Document { definitions: Definition },
);

macro_rules! clone_in_list {
    ($($node:ident { $field:ident }),+ $(,)?) => {
        $(
            impl<'a> CloneIn<'a> for $node<'a> {
                fn clone_in(&self, arena: &'a bumpalo::Bump) -> Self {
                    $node {
                        $field: self
                            .$field
                            .iter()
                            .map(|item| item.clone_in(arena))
                            .collect_in(arena),
                    }
                }
            }
        )+
    };
}

clone_in_list!(
    ListValue { children },
    ObjectValue { children },
    Arguments { children },
    Directives { children },
    VariableDefinitions { children },
);

impl<'a> CloneIn<'a> for Value<'a> {
    fn clone_in(&self, arena: &'a bumpalo::Bump) -> Self {
        match self {
            Value::List(list) => Value::List(list.clone_in(arena)),
            Value::Object(object) => Value::Object(object.clone_in(arena)),
            value => value.clone(),
        }
    }
}

impl<'a> CloneIn<'a> for ObjectField<'a> {
    #[inline]
    fn clone_in(&self, arena: &'a bumpalo::Bump) -> Self {
        ObjectField {
            name: self.name,
            value: self.value.clone_in(arena),
        }
    }
}

impl<'a> CloneIn<'a> for Argument<'a> {
    #[inline]
    fn clone_in(&self, arena: &'a bumpalo::Bump) -> Self {
        Argument {
            name: self.name,
            value: self.value.clone_in(arena),
        }
    }
}

impl<'a> CloneIn<'a> for Directive<'a> {
    #[inline]
    fn clone_in(&self, arena: &'a bumpalo::Bump) -> Self {
        Directive {
            name: self.name,
            arguments: self.arguments.clone_in(arena),
        }
    }
}

impl<'a> CloneIn<'a> for VariableDefinition<'a> {
    fn clone_in(&self, arena: &'a bumpalo::Bump) -> Self {
        VariableDefinition {
            variable: self.variable,
            of_type: self.of_type,
            default_value: self
                .default_value
                .as_ref()
                .map(|value| value.clone_in(arena)),
            directives: self.directives.clone_in(arena),
        }
    }
}

macro_rules! from_variant {
    ($($enum:ident::$variant:ident($node:ident)),+ $(,)?) => {
        $(
            impl<'a> From<$node<'a>> for $enum<'a> {
                #[inline]
                fn from(x: $node<'a>) -> Self {
                    $enum::$variant(x)
                }
            }
        )+
    };
}

from_variant!(
    Value::Variable(Variable),
    Value::String(StringValue),
    Value::Float(FloatValue),
    Value::Int(IntValue),
    Value::Enum(EnumValue),
    Value::List(ListValue),
    Value::Object(ObjectValue),
    Type::NamedType(NamedType),
    Selection::Field(Field),
    Selection::FragmentSpread(FragmentSpread),
    Selection::InlineFragment(InlineFragment),
    Definition::Operation(OperationDefinition),
    Definition::Fragment(FragmentDefinition),
);

impl<'a> From<&'a str> for NamedType<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        NamedType { name }
    }
}

impl<'a> From<&'a str> for Variable<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        Variable { name }
    }
}

impl<'a> From<BooleanValue> for Value<'a> {
    #[inline]
    fn from(x: BooleanValue) -> Self {
        Value::Boolean(x)
    }
}

impl From<bool> for BooleanValue {
    #[inline]
    fn from(value: bool) -> Self {
        BooleanValue { value }
    }
}
