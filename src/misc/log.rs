/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These narrate the progress of a query, and are not part of the result of a query.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [normalization](crate::procedures::normalize)
    pub const NORMALIZATION: &str = "normalization";

    /// Logs related to [resolution](crate::procedures::resolution::resolve) of a pair of clauses
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to [saturation](crate::procedures::resolution::saturate)
    pub const SATURATION: &str = "saturation";

    /// Logs related to the [knowledge base](crate::knowledge_base)
    pub const KNOWLEDGE_BASE: &str = "knowledge_base";
}
