use keep_wire::{
    Color, Item, List, Literal, Node, Note, ParentNode, Timestamp, Timestamps, UNSET_SENTINEL,
    WireError, decode, encode,
};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

mod common;

fn unset_timestamps_json() -> Value {
    json!({
        "kind": "notes#timestamps",
        "created": UNSET_SENTINEL,
        "deleted": UNSET_SENTINEL,
        "trashed": UNSET_SENTINEL,
        "updated": UNSET_SENTINEL,
        "userEdited": UNSET_SENTINEL,
    })
}

fn to_value<T: serde::Serialize>(value: &T) -> Value {
    serde_json::from_str(&encode(value).unwrap()).unwrap()
}

// ── Timestamps ───────────────────────────────────────────────────

#[test]
fn timestamps_default_all_unset() {
    assert_eq!(to_value(&Timestamps::default()), unset_timestamps_json());
}

#[test]
fn timestamps_created_at() {
    let ts = Timestamps::created_at(Timestamp::try_from(common::instant()).unwrap());
    let v = to_value(&ts);
    assert_eq!(v["created"], "2024-03-05T14:07:09.123Z");
    assert_eq!(v["updated"], UNSET_SENTINEL);
    assert!(!ts.is_trashed());
    assert!(!ts.is_deleted());
}

#[test]
fn timestamps_reject_node_kind() {
    let mut v = unset_timestamps_json();
    v["kind"] = json!("notes#node");
    let err = decode::<Timestamps>(&v.to_string()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("tag mismatch"));
    assert!(msg.contains("notes#timestamps"));
    assert!(msg.contains("notes#node"));
    match err {
        WireError::TagMismatch { expected, found } => {
            assert_eq!(expected, "notes#timestamps");
            assert_eq!(found, "notes#node");
        }
        other => panic!("expected TagMismatch, got {other:?}"),
    }
}

#[test]
fn node_with_timestamps_kind_reports_tag_mismatch() {
    let mut v = to_value(&Node::new("a", "", 0));
    v["timestamps"]["kind"] = json!("notes#node");
    let err = decode::<Node>(&v.to_string()).unwrap_err();
    assert!(matches!(err, WireError::TagMismatch { expected: "notes#timestamps", .. }));
}

#[test]
fn timestamps_require_every_field() {
    let mut v = unset_timestamps_json();
    v.as_object_mut().unwrap().remove("userEdited");
    let err = decode::<Timestamps>(&v.to_string()).unwrap_err();
    assert!(err.to_string().contains("userEdited"));
    assert!(matches!(err, WireError::Json(_)));
}

#[test]
fn timestamps_require_kind() {
    let mut v = unset_timestamps_json();
    v.as_object_mut().unwrap().remove("kind");
    assert!(decode::<Timestamps>(&v.to_string()).is_err());
}

// ── Node ─────────────────────────────────────────────────────────

#[test]
fn node_wire_shape() {
    let node = Node::new("abc", "", 7);
    assert_eq!(
        to_value(&node),
        json!({
            "id": "abc",
            "kind": "notes#node",
            "parentId": "",
            "sortValue": 7,
            "timestamps": unset_timestamps_json(),
        })
    );
    assert!(node.is_root());
}

#[test]
fn node_accepts_negative_and_large_sort_values() {
    let mut v = to_value(&Node::new("a", "p", 0));
    v["sortValue"] = json!(-5_000_000_000i64);
    let node: Node = decode(&v.to_string()).unwrap();
    assert_eq!(node.sort_value, -5_000_000_000);
    assert!(!node.is_root());
}

#[test]
fn node_rejects_wrong_kind() {
    let mut v = to_value(&Node::new("a", "", 0));
    v["kind"] = json!("notes#timestamps");
    assert!(decode::<Node>(&v.to_string()).is_err());
}

#[test]
fn node_ignores_unknown_fields() {
    let mut v = to_value(&Node::new("a", "", 0));
    v["serverId"] = json!("srv-1");
    let node: Node = decode(&v.to_string()).unwrap();
    assert_eq!(node, Node::new("a", "", 0));
}

// ── Note ─────────────────────────────────────────────────────────

#[test]
fn note_wire_shape_is_flat() {
    let mut parent = ParentNode::new(Node::new("n1", "", 1), "Ideas");
    parent.archived = true;
    parent.color = Color::Yellow;
    let note = Note::new(parent);

    assert_eq!(
        to_value(&note),
        json!({
            "id": "n1",
            "kind": "notes#node",
            "parentId": "",
            "sortValue": 1,
            "timestamps": unset_timestamps_json(),
            "title": "Ideas",
            "isArchived": true,
            "color": "YELLOW",
            "type": "NOTE",
        })
    );
}

#[test]
fn note_round_trips() {
    let note = Note::new(ParentNode::new(Node::new("n1", "", 1), "Ideas"));
    let back: Note = decode(&encode(&note).unwrap()).unwrap();
    assert_eq!(back, note);
}

#[test]
fn note_rejects_list_type() {
    let mut v = to_value(&Note::default());
    v["type"] = json!("LIST");
    let err = decode::<Note>(&v.to_string()).unwrap_err();
    assert!(err.to_string().contains(r#"expected "NOTE" got "LIST""#));
    assert!(matches!(err, WireError::TagMismatch { expected: "NOTE", .. }));
}

#[test]
fn note_rejects_unknown_color() {
    let mut v = to_value(&Note::default());
    v["color"] = json!("PURPLE");
    let err = decode::<Note>(&v.to_string()).unwrap_err();
    assert!(err.to_string().contains("unknown Color token"));
    assert!(matches!(
        err,
        WireError::UnknownToken { kind: "Color", ref found } if found == "PURPLE"
    ));
}

#[test]
fn note_requires_color() {
    let mut v = to_value(&Note::default());
    v.as_object_mut().unwrap().remove("color");
    assert!(decode::<Note>(&v.to_string()).is_err());
}

// ── List ─────────────────────────────────────────────────────────

#[test]
fn list_default_has_literal_tags() {
    let list = List::default();
    assert_eq!(list.kind, Literal::new());
    let v = to_value(&list);
    assert_eq!(v["type"], "LIST");
    assert_eq!(v["kind"], "notes#node");
    assert_eq!(v["color"], "DEFAULT");
}

#[test]
fn list_rejects_note_type() {
    let mut v = to_value(&List::default());
    v["type"] = json!("NOTE");
    assert!(decode::<List>(&v.to_string()).is_err());
}

// ── Item ─────────────────────────────────────────────────────────

#[test]
fn item_wire_shape() {
    let mut item = Item::new(Node::new("i1", "l1", 3), "Milk");
    item.checked = true;

    assert_eq!(
        to_value(&item),
        json!({
            "id": "i1",
            "kind": "notes#node",
            "parentId": "l1",
            "sortValue": 3,
            "timestamps": unset_timestamps_json(),
            "type": "LIST_ITEM",
            "checked": true,
            "text": "Milk",
        })
    );
}

#[test]
fn item_has_no_parent_node_fields() {
    let v = to_value(&Item::default());
    assert!(v.get("title").is_none());
    assert!(v.get("color").is_none());
    assert!(v.get("isArchived").is_none());
}

#[test]
fn item_round_trips() {
    let mut node = Node::new("i1", "l1", 3);
    node.timestamps.trashed = Timestamp::try_from(common::instant()).unwrap();
    let item = Item::new(node, "Eggs");
    let back: Item = decode(&encode(&item).unwrap()).unwrap();
    assert_eq!(back, item);
    assert!(back.node.timestamps.is_trashed());
}

#[test]
fn item_rejects_malformed_timestamp() {
    let mut v = to_value(&Item::default());
    v["timestamps"]["updated"] = json!("2024-03-05T14:07:09Z");
    let err = decode::<Item>(&v.to_string()).unwrap_err();
    assert!(err.to_string().contains("malformed timestamp"));
    assert!(matches!(
        err,
        WireError::MalformedTimestamp(ref s) if s == "2024-03-05T14:07:09Z"
    ));
}

#[test]
fn item_requires_checked() {
    let mut v = to_value(&Item::default());
    v.as_object_mut().unwrap().remove("checked");
    assert!(decode::<Item>(&v.to_string()).is_err());
}
