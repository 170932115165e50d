/// Router Module Index
///
/// Organizes the navigation surface into access-segregated modules. The split
/// makes the access-control story explicit at the module level: every route in
/// `gated` sits behind exactly one required role, applied as a route layer in
/// `create_router`, while `public` routes carry no guard at all.

/// Pages and session actions accessible to any visitor, anonymous included.
pub mod public;

/// Role-restricted pages, one router per required role. Each router is
/// wrapped by the `require_role` guard middleware configured with that role.
pub mod gated;
