/*!
An atom (aka. a 'variable').

Broadly, atoms are things with a name to which assigning a (boolean) value (true or false) is of interest.

The name *is* the atom: two atoms are the same exactly when their names are the same.
Names are shared rather than copied, so cloning an atom (or any expression containing an atom) does not allocate a fresh string.

```rust
# use propositional_kb::structures::atom::Atom;
let p: Atom = Atom::from("p");
let also_p = p.clone();

assert_eq!(p, also_p);
assert!(std::sync::Arc::ptr_eq(&p, &also_p));
assert_ne!(p, Atom::from("q"));
```

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
*/

/// An atom, aka. a 'variable'.
pub type Atom = std::sync::Arc<str>;
