/*!
Configuration of a [knowledge base](crate::context::KnowledgeBase).

All configuration for a knowledge base is contained within a [Config], and a knowledge base holds its own copy of the config it was built from.

Each option is a [ConfigOption], recording the name of the option alongside bounds on its value.

# Example

```rust
# use propositional_kb::config::Config;
# use propositional_kb::context::KnowledgeBase;
let mut config = Config::default();
config.round_limit.value = 16;
config.tautology_elimination.value = true;

let the_kb = KnowledgeBase::from_config(config);
assert_eq!(the_kb.config.round_limit.value, 16);
```
*/

mod config_option;
pub use config_option::ConfigOption;

/// A limit on some count, with [usize::MAX] as the absence of a limit.
pub type Limit = usize;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The most rounds of resolution to apply when answering a query.
    pub round_limit: ConfigOption<Limit>,

    /// The most clauses to hold (facts, negated query, and resolvents) when answering a query.
    pub clause_limit: ConfigOption<Limit>,

    /// Discard any resolvent containing some literal and its negation.
    ///
    /// Such a resolvent is true on every valuation, and so never contributes to a refutation.
    pub tautology_elimination: ConfigOption<bool>,
}

impl Default for Config {
    /// By default resolution is unbounded and every resolvent is kept.
    fn default() -> Self {
        Config {
            round_limit: ConfigOption {
                name: "round_limit",
                min: 1,
                max: Limit::MAX,
                value: Limit::MAX,
            },

            clause_limit: ConfigOption {
                name: "clause_limit",
                min: 1,
                max: Limit::MAX,
                value: Limit::MAX,
            },

            tautology_elimination: ConfigOption {
                name: "tautology_elimination",
                min: false,
                max: true,
                value: false,
            },
        }
    }
}
