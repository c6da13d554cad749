//! CSS selector matching engine.
//! Reference: <https://www.w3.org/TR/selectors-3/>

use crate::{
    Combinator, ComplexSelector, CompoundSelector, ElementAdapter, SelectorList, SimpleSelector,
};

/// Match a selector list against an element.
/// Selectors-3 §3, 4
pub fn matches_selector_list<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    list: &SelectorList,
) -> bool {
    list.selectors
        .iter()
        .any(|selector_item| matches_complex(adapter, element, selector_item))
}

/// Match a complex selector against an element.
/// Selectors-3 §3, 11: Right-to-left matching strategy
pub fn matches_complex<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    sel: &ComplexSelector,
) -> bool {
    matches_from(adapter, element, sel, sel.rest.len())
}

/// Match a compound selector against a single element.
/// Selectors-3 §5–8
pub fn matches_compound<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    compound: &CompoundSelector,
) -> bool {
    compound.simples.iter().all(|simple| match simple {
        SimpleSelector::Universal => true,
        SimpleSelector::Type(type_name) => {
            type_name.is_empty() || adapter.tag_name(element) == type_name.as_str()
        }
        SimpleSelector::Class(class_name) => adapter.has_class(element, class_name),
        SimpleSelector::IdSelector(id_value) => adapter
            .element_id(element)
            .is_some_and(|value| value == id_value.as_str()),
        SimpleSelector::AttrExists(name) => adapter.attr(element, name).is_some(),
        SimpleSelector::AttrEquals { name, value } => adapter
            .attr(element, name)
            .is_some_and(|attr_value| attr_value == value.as_str()),
        SimpleSelector::Not(compounds) => !compounds
            .iter()
            .any(|negated| matches_compound(adapter, element, negated)),
    })
}

/// Compound at `position`, where 0 is `sel.first` and `n` is `sel.rest[n - 1]`.
fn compound_at(sel: &ComplexSelector, position: usize) -> Option<&CompoundSelector> {
    match position.checked_sub(1) {
        None => Some(&sel.first),
        Some(rest_index) => sel.rest.get(rest_index).map(|pair| &pair.1),
    }
}

/// Match `element` against the compound at `position`, then relate the
/// compounds to its left through their combinators, backtracking over
/// ancestors and siblings.
/// Selectors-3 §11: Combinators
fn matches_from<A: ElementAdapter>(
    adapter: &A,
    element: A::Handle,
    sel: &ComplexSelector,
    position: usize,
) -> bool {
    let Some(compound) = compound_at(sel, position) else {
        return false;
    };
    if !matches_compound(adapter, element, compound) {
        return false;
    }
    let Some(left) = position.checked_sub(1) else {
        return true;
    };
    let Some(&(combinator, _)) = sel.rest.get(left) else {
        return false;
    };
    match combinator {
        Combinator::Child => adapter
            .parent(element)
            .is_some_and(|parent| matches_from(adapter, parent, sel, left)),
        Combinator::AdjacentSibling => adapter
            .previous_sibling_element(element)
            .is_some_and(|sibling| matches_from(adapter, sibling, sel, left)),
        Combinator::Descendant => {
            let mut current = adapter.parent(element);
            while let Some(ancestor) = current {
                if matches_from(adapter, ancestor, sel, left) {
                    return true;
                }
                current = adapter.parent(ancestor);
            }
            false
        }
        Combinator::GeneralSibling => {
            let mut current = adapter.previous_sibling_element(element);
            while let Some(sibling) = current {
                if matches_from(adapter, sibling, sel, left) {
                    return true;
                }
                current = adapter.previous_sibling_element(sibling);
            }
            false
        }
    }
}
