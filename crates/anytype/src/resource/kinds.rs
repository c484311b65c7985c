//! Per-kind routes and envelope tables.

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::http::Envelope;
use crate::model::{
    List, ListCreate, ListUpdate, Member, MemberInvite, MemberUpdate, Object, ObjectCreate,
    ObjectTypeDefinition, ObjectUpdate, Property, PropertyCreate, PropertyUpdate, Space,
    SpaceCreate, SpaceUpdate, Tag, TagCreate, TagUpdate, Template, TemplateCreate,
    TemplateUpdate,
};

/// Path templates for a kind's collection and items.
///
/// `{space_id}` and `{id}` are substituted as whole, percent-encoded path
/// segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routes {
    /// Used by list and create.
    pub collection: &'static str,
    /// Used by get, update and delete.
    pub item: &'static str,
}

impl Routes {
    pub fn collection_path(&self, space_id: Option<&str>) -> Vec<String> {
        render(self.collection, space_id, None)
    }

    pub fn item_path(&self, space_id: Option<&str>, id: &str) -> Vec<String> {
        render(self.item, space_id, Some(id))
    }
}

fn render(template: &str, space_id: Option<&str>, id: Option<&str>) -> Vec<String> {
    template
        .split('/')
        .map(|segment| match segment {
            "{space_id}" => space_id.unwrap_or_default(),
            "{id}" => id.unwrap_or_default(),
            literal => literal,
        })
        .map(str::to_string)
        .collect()
}

/// An entity kind reachable through [`Resource`](super::Resource).
pub trait Kind: DeserializeOwned + Send + 'static {
    /// Singular name, for logs.
    const NAME: &'static str;
    const ROUTES: Routes;
    /// Envelope candidates for single-entity responses, in priority order.
    const SINGLE: &'static [Envelope];
    /// Envelope candidates for list responses, in priority order.
    const LIST: &'static [Envelope];

    /// Called with the space from the request path after decoding.
    fn attach_scope(&mut self, _space_id: &str) {}
}

/// A kind that can be created, updated and deleted.
pub trait Mutable: Kind {
    type Create: Serialize + Sync;
    type Update: Serialize + Sync;

    /// Whether create bodies repeat the space from the path as `space_id`.
    const BODY_SCOPE: bool = false;
}

impl Kind for Space {
    const NAME: &'static str = "space";
    const ROUTES: Routes = Routes {
        collection: "spaces",
        item: "spaces/{id}",
    };
    const SINGLE: &'static [Envelope] = &[Envelope::Key("space"), Envelope::Bare];
    const LIST: &'static [Envelope] = &[Envelope::Key("data"), Envelope::Array, Envelope::Key("spaces")];
}

impl Mutable for Space {
    type Create = SpaceCreate;
    type Update = SpaceUpdate;
}

impl Kind for Object {
    const NAME: &'static str = "object";
    const ROUTES: Routes = Routes {
        collection: "spaces/{space_id}/objects",
        item: "spaces/{space_id}/objects/{id}",
    };
    const SINGLE: &'static [Envelope] = &[Envelope::Key("object"), Envelope::Bare];
    const LIST: &'static [Envelope] = &[Envelope::Key("data"), Envelope::Array, Envelope::Key("objects")];
}

impl Mutable for Object {
    type Create = ObjectCreate;
    type Update = ObjectUpdate;
}

impl Kind for ObjectTypeDefinition {
    const NAME: &'static str = "type";
    const ROUTES: Routes = Routes {
        collection: "spaces/{space_id}/types",
        item: "spaces/{space_id}/types/{id}",
    };
    const SINGLE: &'static [Envelope] = &[Envelope::Key("type"), Envelope::Bare];
    const LIST: &'static [Envelope] = &[Envelope::Key("data"), Envelope::Array, Envelope::Key("types")];
}

impl Kind for List {
    const NAME: &'static str = "list";
    const ROUTES: Routes = Routes {
        collection: "spaces/{space_id}/lists",
        item: "lists/{id}",
    };
    const SINGLE: &'static [Envelope] = &[Envelope::Key("list"), Envelope::Bare];
    const LIST: &'static [Envelope] = &[Envelope::Key("data"), Envelope::Array, Envelope::Key("lists")];
}

impl Mutable for List {
    type Create = ListCreate;
    type Update = ListUpdate;
    const BODY_SCOPE: bool = true;
}

impl Kind for Member {
    const NAME: &'static str = "member";
    const ROUTES: Routes = Routes {
        collection: "spaces/{space_id}/members",
        item: "spaces/{space_id}/members/{id}",
    };
    const SINGLE: &'static [Envelope] = &[Envelope::Key("member"), Envelope::Bare];
    const LIST: &'static [Envelope] = &[Envelope::Key("data"), Envelope::Array, Envelope::Key("members")];

    // Member responses do not carry their space.
    fn attach_scope(&mut self, space_id: &str) {
        self.meta.space_id.get_or_insert_with(|| space_id.to_string());
    }
}

impl Mutable for Member {
    type Create = MemberInvite;
    type Update = MemberUpdate;
    const BODY_SCOPE: bool = true;
}

impl Kind for Property {
    const NAME: &'static str = "property";
    const ROUTES: Routes = Routes {
        collection: "spaces/{space_id}/properties",
        item: "spaces/{space_id}/properties/{id}",
    };
    const SINGLE: &'static [Envelope] = &[Envelope::Key("property"), Envelope::Bare];
    const LIST: &'static [Envelope] = &[
        Envelope::Key("data"),
        Envelope::Array,
        Envelope::Key("properties"),
    ];
}

impl Mutable for Property {
    type Create = PropertyCreate;
    type Update = PropertyUpdate;
    const BODY_SCOPE: bool = true;
}

impl Kind for Tag {
    const NAME: &'static str = "tag";
    const ROUTES: Routes = Routes {
        collection: "spaces/{space_id}/tags",
        item: "tags/{id}",
    };
    const SINGLE: &'static [Envelope] = &[Envelope::Key("tag"), Envelope::Bare];
    const LIST: &'static [Envelope] = &[Envelope::Key("data"), Envelope::Array, Envelope::Key("tags")];
}

impl Mutable for Tag {
    type Create = TagCreate;
    type Update = TagUpdate;
    const BODY_SCOPE: bool = true;
}

impl Kind for Template {
    const NAME: &'static str = "template";
    const ROUTES: Routes = Routes {
        collection: "spaces/{space_id}/templates",
        item: "templates/{id}",
    };
    const SINGLE: &'static [Envelope] = &[Envelope::Key("template"), Envelope::Bare];
    const LIST: &'static [Envelope] = &[
        Envelope::Key("data"),
        Envelope::Array,
        Envelope::Key("templates"),
    ];
}

impl Mutable for Template {
    type Create = TemplateCreate;
    type Update = TemplateUpdate;
    const BODY_SCOPE: bool = true;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_scoped_item_route() {
        let path = Object::ROUTES.item_path(Some("s1"), "o1");
        assert_eq!(path, ["spaces", "s1", "objects", "o1"]);
    }

    #[test]
    fn global_item_routes() {
        assert_eq!(Tag::ROUTES.item_path(Some("s1"), "t1"), ["tags", "t1"]);
        assert_eq!(List::ROUTES.item_path(Some("s1"), "l1"), ["lists", "l1"]);
        assert_eq!(Template::ROUTES.item_path(Some("s1"), "x"), ["templates", "x"]);
        assert_eq!(
            Tag::ROUTES.collection_path(Some("s1")),
            ["spaces", "s1", "tags"]
        );
    }

    #[test]
    fn spaces_are_top_level() {
        assert_eq!(Space::ROUTES.collection_path(None), ["spaces"]);
        assert_eq!(Space::ROUTES.item_path(None, "s1"), ["spaces", "s1"]);
    }

    #[test]
    fn only_nested_kinds_repeat_space_in_create_body() {
        let nested = [
            Tag::BODY_SCOPE,
            List::BODY_SCOPE,
            Member::BODY_SCOPE,
            Property::BODY_SCOPE,
            Template::BODY_SCOPE,
        ];
        assert_eq!(nested, [true; 5]);
        assert_eq!([Object::BODY_SCOPE, Space::BODY_SCOPE], [false, false]);
    }

    #[test]
    fn member_scope_is_filled_once() {
        let mut member: Member = serde_json::from_value(serde_json::json!({
            "id": "m1", "name": "Ada", "role": "owner"
        }))
        .unwrap();
        member.attach_scope("s1");
        member.attach_scope("s2");
        assert_eq!(member.meta.space_id.as_deref(), Some("s1"));
    }
}
