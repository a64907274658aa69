/*!
A (partial) function from atoms to truth values.

If all atoms of interest are assigned a value the valuation is 'total', otherwise the valuation is 'partial'.

The canonical representation of a valuation is an ordered map from atoms to booleans, where an atom absent from the map has no value.
Still, the trait is implemented for any (hash or ordered) map whose keys can be borrowed as a string, so a valuation may be written with string literals.

```rust
# use std::collections::HashMap;
# use propositional_kb::structures::valuation::Valuation;
let valuation = HashMap::from([("p", true), ("q", false)]);

assert_eq!(valuation.value_of("p"), Some(true));
assert_eq!(valuation.value_of("q"), Some(false));
assert_eq!(valuation.value_of("r"), None);
```
*/

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    hash::{BuildHasher, Hash},
};

use super::atom::Atom;

/// The canonical representation of a valuation.
pub type CValuation = BTreeMap<Atom, bool>;

/// A valuation is something which stores some value of an atom and/or perhaps the information that the atom has no value.
pub trait Valuation {
    /// Some value of an atom under the valuation, or otherwise nothing.
    fn value_of(&self, atom: &str) -> Option<bool>;
}

impl<K: Borrow<str> + Ord> Valuation for BTreeMap<K, bool> {
    fn value_of(&self, atom: &str) -> Option<bool> {
        self.get(atom).copied()
    }
}

impl<K: Borrow<str> + Hash + Eq, S: BuildHasher> Valuation for HashMap<K, bool, S> {
    fn value_of(&self, atom: &str) -> Option<bool> {
        self.get(atom).copied()
    }
}

/// A string of the valuation, with each atom written as a literal true on the valuation.
///
/// ```rust
/// # use propositional_kb::structures::valuation::{self, CValuation};
/// let valuation = CValuation::from([("p".into(), true), ("q".into(), false)]);
/// assert_eq!(valuation::valuation_string(&valuation), "p ¬q");
/// ```
pub fn valuation_string(valuation: &CValuation) -> String {
    valuation
        .iter()
        .map(|(atom, value)| match value {
            true => format!("{atom}"),
            false => format!("¬{atom}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
