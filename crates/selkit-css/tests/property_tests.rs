//! Property tests: any grammar-ordered chain renders to the concatenation of
//! its parts, and any backwards step is rejected.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use selkit_css::{Category, Selector, SelectorError};
use strum::IntoEnumIterator;

const VALUES: &[&str] = &[
    "div",
    "main",
    "nth-of-type(even)",
    r#"href$=".png""#,
    "data-x",
    "",
    "before",
];

fn arbitrary_value(g: &mut Gen) -> String {
    (*g.choose(VALUES).unwrap_or(&"x")).to_string()
}

/// A sequence of parts that respects ordering and singleton rules.
#[derive(Debug, Clone)]
struct OrderedParts(Vec<(Category, String)>);

impl Arbitrary for OrderedParts {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut parts = Vec::new();
        for category in Category::iter() {
            let count = if category.is_singleton() {
                usize::from(bool::arbitrary(g))
            } else {
                usize::arbitrary(g) % 4
            };
            for _ in 0..count {
                parts.push((category, arbitrary_value(g)));
            }
        }
        Self(parts)
    }
}

#[derive(Debug, Clone, Copy)]
struct AnyCategory(Category);

impl Arbitrary for AnyCategory {
    fn arbitrary(g: &mut Gen) -> Self {
        let all: Vec<Category> = Category::iter().collect();
        Self(*g.choose(&all).unwrap_or(&Category::Class))
    }
}

fn literal(category: Category, value: &str) -> String {
    format!("{}{value}{}", category.prefix(), category.suffix())
}

#[quickcheck]
fn ordered_chain_renders_concatenation(parts: OrderedParts) -> bool {
    let expected: String = parts
        .0
        .iter()
        .map(|(category, value)| literal(*category, value))
        .collect();

    let built = parts
        .0
        .iter()
        .try_fold(Selector::new(), |selector, (category, value)| {
            selector.append(*category, value)
        });

    match built {
        Ok(mut selector) => selector.stringify() == expected && selector.stringify().is_empty(),
        Err(_) => false,
    }
}

#[quickcheck]
fn backwards_step_is_rejected(first: AnyCategory, second: AnyCategory) -> bool {
    let (first, second) = (first.0, second.0);
    let result = Selector::new()
        .append(first, "a")
        .and_then(|selector| selector.append(second, "b"));

    if first == second && first.is_singleton() {
        result == Err(SelectorError::DuplicateCategory { category: second })
    } else if first > second {
        result
            == Err(SelectorError::OrderViolation {
                category: second,
                after: first,
            })
    } else {
        result.is_ok()
    }
}
