//! Typed entities, request payloads and query parameters.
//!
//! Entities deserialize leniently: optional fields default when absent and
//! unknown fields are ignored. Create payloads carry only what the caller
//! set; update payloads skip every field left unset, so "leave unchanged"
//! and "clear" stay distinct (see [`Patch`]).

mod common;
mod event;
mod list;
mod member;
mod object;
mod pagination;
mod patch;
mod property;
mod search;
mod space;
mod tag;
mod template;
mod type_def;

pub use common::{Entity, Meta};
pub use event::{Event, EventType};
pub use list::{List, ListCreate, ListItem, ListUpdate};
pub use member::{Member, MemberInvite, MemberRole, MemberUpdate};
pub use object::{Icon, Layout, Object, ObjectCreate, ObjectTypeRef, ObjectUpdate, PropertyValue};
pub use pagination::{Pagination, SortDirection};
pub use patch::Patch;
pub use property::{Property, PropertyCreate, PropertyFormat, PropertyUpdate};
pub use search::SearchQuery;
pub use space::{Space, SpaceCreate, SpaceUpdate};
pub use tag::{Tag, TagColor, TagCreate, TagUpdate};
pub use template::{ObjectKind, Template, TemplateCreate, TemplateType, TemplateUpdate};
pub use type_def::{ObjectTypeDefinition, TypeLayout, TypeLayoutSpec};
