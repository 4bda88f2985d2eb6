//! Declarative authorization policy.
//!
//! Every role-gated endpoint consults one table instead of hand-rolling role
//! comparisons in the handler. A rule grants a role either [`Scope::Any`]
//! (the action applies to every record) or [`Scope::Owned`] (the action is
//! limited to records the caller owns -- the handler resolves ownership
//! against the concrete row). Anything not listed is denied.
//!
//! Public endpoints (lesson/material/Q&A reads, registration) never reach
//! the gate; this table covers authenticated access only.

use crate::error::CoreError;
use crate::roles::Role;

/// A protected resource class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Category,
    Course,
    Lesson,
    Material,
    Enrollment,
    User,
}

/// The kind of access being requested.
///
/// `List` and `Read` are distinct because several resources filter listings
/// by ownership while denying (or widening) single-record reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    List,
    Read,
    Create,
    Update,
    Delete,
}

/// How far a granted permission reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The action applies to any record of the resource.
    Any,
    /// The action is limited to records owned by the caller.
    Owned,
}

type Rule = (Resource, Action, Role, Scope);

/// The access-control table. One row per (resource, action, role) grant;
/// absence means deny.
const POLICY: &[Rule] = &[
    // Categories: anyone authenticated may browse, only admins create.
    (Resource::Category, Action::List, Role::Admin, Scope::Any),
    (Resource::Category, Action::List, Role::Teacher, Scope::Any),
    (Resource::Category, Action::List, Role::Student, Scope::Any),
    (Resource::Category, Action::Create, Role::Admin, Scope::Any),
    // Courses: teachers author and manage their own; admins see everything
    // but do not edit on a teacher's behalf; students browse the catalog
    // through listings only, single-record reads stay with admins and the
    // owning teacher.
    (Resource::Course, Action::List, Role::Admin, Scope::Any),
    (Resource::Course, Action::List, Role::Teacher, Scope::Owned),
    (Resource::Course, Action::List, Role::Student, Scope::Any),
    (Resource::Course, Action::Read, Role::Admin, Scope::Any),
    (Resource::Course, Action::Read, Role::Teacher, Scope::Owned),
    (Resource::Course, Action::Create, Role::Teacher, Scope::Any),
    (Resource::Course, Action::Update, Role::Teacher, Scope::Owned),
    (Resource::Course, Action::Delete, Role::Teacher, Scope::Owned),
    // Lessons and materials: creation is limited to the owning teacher (or
    // an admin); "owned" here means the parent course is owned by the caller.
    (Resource::Lesson, Action::Create, Role::Admin, Scope::Any),
    (Resource::Lesson, Action::Create, Role::Teacher, Scope::Owned),
    (Resource::Material, Action::Create, Role::Admin, Scope::Any),
    (Resource::Material, Action::Create, Role::Teacher, Scope::Owned),
    // Enrollments: self-service creation; students list their own rows only.
    (Resource::Enrollment, Action::Create, Role::Admin, Scope::Any),
    (Resource::Enrollment, Action::Create, Role::Teacher, Scope::Any),
    (Resource::Enrollment, Action::Create, Role::Student, Scope::Any),
    (Resource::Enrollment, Action::List, Role::Admin, Scope::Any),
    (Resource::Enrollment, Action::List, Role::Teacher, Scope::Any),
    (Resource::Enrollment, Action::List, Role::Student, Scope::Owned),
    // Users: admins manage accounts, everyone else is limited to themself.
    (Resource::User, Action::List, Role::Admin, Scope::Any),
    (Resource::User, Action::List, Role::Teacher, Scope::Owned),
    (Resource::User, Action::List, Role::Student, Scope::Owned),
    (Resource::User, Action::Read, Role::Admin, Scope::Any),
    (Resource::User, Action::Read, Role::Teacher, Scope::Owned),
    (Resource::User, Action::Read, Role::Student, Scope::Owned),
    (Resource::User, Action::Update, Role::Admin, Scope::Owned),
    (Resource::User, Action::Update, Role::Teacher, Scope::Owned),
    (Resource::User, Action::Update, Role::Student, Scope::Owned),
    (Resource::User, Action::Delete, Role::Admin, Scope::Any),
];

/// Look up the scope granted to `role` for `action` on `resource`.
///
/// Returns `None` when the table has no matching rule (deny).
pub fn scope_for(role: Role, resource: Resource, action: Action) -> Option<Scope> {
    POLICY
        .iter()
        .find(|(res, act, r, _)| *res == resource && *act == action && *r == role)
        .map(|(_, _, _, scope)| *scope)
}

/// The authorization gate. Returns the granted [`Scope`] or a
/// [`CoreError::Forbidden`] with a message naming the denied action.
pub fn authorize(role: Role, resource: Resource, action: Action) -> Result<Scope, CoreError> {
    scope_for(role, resource, action).ok_or_else(|| {
        CoreError::Forbidden(format!(
            "Role '{role}' is not allowed to {action:?} {resource:?}"
        ))
    })
}
