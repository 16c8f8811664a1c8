//! Property tests: any sequence of fragment calls either renders to the exact
//! canonical concatenation or fails where the ordering rules say it must.

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;
use selkit_css::{FragmentKind, SelectorBuilder, SelectorConstructionError};
use strum::IntoEnumIterator;

/// One fragment call with a short lowercase value.
#[derive(Debug, Clone)]
struct Op {
    kind: FragmentKind,
    value: String,
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        let kinds: Vec<FragmentKind> = FragmentKind::iter().collect();
        let kind = *g.choose(&kinds).unwrap();
        let len = usize::arbitrary(g) % 4 + 1;
        let value = (0..len)
            .map(|_| *g.choose(&['a', 'b', 'c', 'x', '-']).unwrap())
            .collect();
        Self { kind, value }
    }
}

fn apply(builder: SelectorBuilder, op: &Op) -> Result<SelectorBuilder, SelectorConstructionError> {
    let value = op.value.clone();
    match op.kind {
        FragmentKind::Element => builder.set_element(value),
        FragmentKind::Id => builder.set_id(value),
        FragmentKind::Class => builder.add_class(value),
        FragmentKind::Attribute => builder.add_attribute(value),
        FragmentKind::PseudoClass => builder.add_pseudo_class(value),
        FragmentKind::PseudoElement => builder.set_pseudo_element(value),
    }
}

/// Reference model: which fragments were accepted and whether `op` is legal.
#[derive(Default)]
struct Model {
    accepted: Vec<(FragmentKind, String)>,
}

impl Model {
    fn last(&self) -> Option<FragmentKind> {
        self.accepted.iter().map(|(kind, _)| *kind).max()
    }

    fn has(&self, kind: FragmentKind) -> bool {
        self.accepted.iter().any(|(k, _)| *k == kind)
    }

    fn legal(&self, op: &Op) -> bool {
        match op.kind {
            FragmentKind::Element => self.last().is_none(),
            FragmentKind::PseudoElement => !self.has(FragmentKind::PseudoElement),
            kind if kind.is_singleton() && self.has(kind) => false,
            kind => self.last().is_none_or(|last| last <= kind),
        }
    }

    fn render(&self) -> String {
        let mut ordered = self.accepted.clone();
        // Stable sort keeps insertion order within a category.
        ordered.sort_by_key(|(kind, _)| *kind);
        ordered
            .iter()
            .map(|(kind, value)| format!("{}{value}{}", kind.prefix(), kind.suffix()))
            .collect()
    }
}

#[test]
fn test_fragment_kinds_iterate_in_rendering_order() {
    let kinds: Vec<FragmentKind> = FragmentKind::iter().collect();
    assert_eq!(kinds.len(), 6);
    assert!(kinds.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(
        kinds.iter().map(ToString::to_string).collect::<Vec<_>>(),
        ["element", "id", "class", "attribute", "pseudo-class", "pseudo-element"]
    );
}

#[quickcheck]
fn prop_builder_agrees_with_model(ops: Vec<Op>) -> bool {
    let mut model = Model::default();
    let mut builder = SelectorBuilder::new();

    for op in &ops {
        let legal = model.legal(op);
        match apply(builder, op) {
            Ok(next) if legal => {
                model.accepted.push((op.kind, op.value.clone()));
                builder = next;
            }
            Err(err) if !legal => return err.fragment() == op.kind,
            _ => return false,
        }
    }

    builder.render() == model.render()
}

#[quickcheck]
fn prop_sorted_sequences_always_succeed(ops: Vec<Op>) -> bool {
    let mut ops = ops;
    ops.sort_by_key(|op| op.kind);
    let mut seen_singletons = Vec::new();
    ops.retain(|op| {
        if !op.kind.is_singleton() {
            return true;
        }
        if seen_singletons.contains(&op.kind) {
            return false;
        }
        seen_singletons.push(op.kind);
        true
    });

    let mut builder = SelectorBuilder::new();
    for op in &ops {
        match apply(builder, op) {
            Ok(next) => builder = next,
            Err(_) => return false,
        }
    }

    let expected: String = ops
        .iter()
        .map(|op| format!("{}{}{}", op.kind.prefix(), op.value, op.kind.suffix()))
        .collect();
    builder.render() == expected
}
