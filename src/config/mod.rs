/*!
Configuration of a knowledge base.

All configuration for a knowledge base is contained within a [Config], which is cloned into each query.

Each option is a [ConfigOption], and by default no option restricts a query.
So, with the default configuration a query always ends with an answer.

```rust
# use otter_entail::config::Config;
# use otter_entail::knowledge_base::KnowledgeBase;
let mut config = Config::default();
assert!(config.round_limit.set(12));
assert!(!config.round_limit.set(usize::MAX));
assert_eq!(config.round_limit.value, 12);

let kb = KnowledgeBase::from_config(config);
```
*/

mod config_option;
pub use config_option::ConfigOption;

use std::time::Duration;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The maximum number of saturation rounds in a query, with zero for no limit.
    pub round_limit: ConfigOption<usize>,

    /// The time limit for the saturation of a query, with zero for no limit.
    pub time_limit: ConfigOption<Duration>,
}

impl Config {
    /// The round limit, if some limit is set.
    pub fn round_limit(&self) -> Option<usize> {
        (self.round_limit.value != 0).then_some(self.round_limit.value)
    }

    /// The time limit, if some limit is set.
    pub fn time_limit(&self) -> Option<Duration> {
        (!self.time_limit.value.is_zero()).then_some(self.time_limit.value)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            round_limit: ConfigOption {
                name: "round_limit",
                min: 0,
                max: u32::MAX as usize,
                value: 0,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },
        }
    }
}
