//! Room template model: per-type content bundles and the arena of
//! instantiated copies.
//!
//! A template is the unit the asset collaborator hands over per room type:
//! tile fragments keyed by destination layer name plus auxiliary objects
//! with local placement. Compositing instantiates a copy per room, reads it,
//! and releases it in the same iteration; only the Start room's copy is
//! retained, with ownership handed to the caller through the generation
//! result.

use std::collections::BTreeMap;

use slotmap::{SlotMap, new_key_type};

use crate::types::{RoomType, TileId, TilePos, WorldVec};

/// A rectangular run of local tile cells destined for one named layer.
/// `cells` is row-major over `width * height`; `None` marks an empty cell
/// that must not overwrite the destination.
#[derive(Clone, Debug, PartialEq)]
pub struct TileFragment {
    pub layer: String,
    pub origin: TilePos,
    pub width: u32,
    pub height: u32,
    pub cells: Vec<Option<TileId>>,
}

impl TileFragment {
    /// Fragment with every cell set to `tile`.
    pub fn filled(layer: &str, origin: TilePos, width: u32, height: u32, tile: TileId) -> Self {
        Self {
            layer: layer.to_string(),
            origin,
            width,
            height,
            cells: vec![Some(tile); (width * height) as usize],
        }
    }

    pub fn cell(&self, x: u32, y: u32) -> Option<TileId> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells[(y * self.width + x) as usize]
    }
}

/// A non-tile child of a template: a marker, decoration, or other scene
/// object placed relative to the room origin.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateObject {
    pub name: String,
    pub local_position: WorldVec,
    pub rotation: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TemplateDef {
    pub name: String,
    pub fragments: Vec<TileFragment>,
    pub objects: Vec<TemplateObject>,
}

/// The asset collaborator. Returning `None` means the room stays empty,
/// which is a valid layout outcome rather than an error.
pub trait TemplateLibrary {
    fn template_for(&self, room_type: RoomType) -> Option<&TemplateDef>;
}

/// Minimal library holding one template per room type. Picking among
/// multiple candidates per type is the surrounding system's policy and
/// stays behind the trait.
#[derive(Clone, Debug, Default)]
pub struct TemplateSet {
    templates: BTreeMap<RoomType, TemplateDef>,
}

impl TemplateSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, room_type: RoomType, template: TemplateDef) {
        self.templates.insert(room_type, template);
    }
}

impl TemplateLibrary for TemplateSet {
    fn template_for(&self, room_type: RoomType) -> Option<&TemplateDef> {
        self.templates.get(&room_type)
    }
}

new_key_type! {
    pub struct TemplateInstanceKey;
}

/// A live copy of a template's content.
#[derive(Clone, Debug, PartialEq)]
pub struct TemplateInstance {
    pub template_name: String,
    pub fragments: Vec<TileFragment>,
    pub objects: Vec<TemplateObject>,
}

impl TemplateInstance {
    pub fn object_named(&self, name: &str) -> Option<&TemplateObject> {
        self.objects.iter().find(|object| object.name == name)
    }
}

/// Arena of instantiated template copies. Releasing is explicit; whatever
/// is still alive when generation finishes (the retained Start instance)
/// travels with the result to the caller.
#[derive(Clone, Debug, Default)]
pub struct TemplateInstances {
    instances: SlotMap<TemplateInstanceKey, TemplateInstance>,
}

impl TemplateInstances {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn instantiate(&mut self, template: &TemplateDef) -> TemplateInstanceKey {
        self.instances.insert(TemplateInstance {
            template_name: template.name.clone(),
            fragments: template.fragments.clone(),
            objects: template.objects.clone(),
        })
    }

    pub(crate) fn release(&mut self, key: TemplateInstanceKey) {
        self.instances.remove(key);
    }

    pub fn get(&self, key: TemplateInstanceKey) -> Option<&TemplateInstance> {
        self.instances.get(key)
    }

    /// Remove and return an instance, transferring ownership to the caller.
    pub fn take(&mut self, key: TemplateInstanceKey) -> Option<TemplateInstance> {
        self.instances.remove(key)
    }

    pub fn len(&self) -> usize {
        self.instances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}
