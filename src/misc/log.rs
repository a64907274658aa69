/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when extending the library and/or tracking down why some query was (or was not) entailed.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [conversion to CNF](crate::procedures::cnf)
    pub const CNF: &str = "cnf";

    /// Logs related to the [clause database](crate::db::clause)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [resolution](crate::procedures::resolution)
    pub const RESOLUTION: &str = "resolution";

    /// Logs related to the [enumeration](crate::procedures::enumeration) of satisfying assignments
    pub const ENUMERATION: &str = "enumeration";
}
