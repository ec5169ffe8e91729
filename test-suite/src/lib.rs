//! Shared builder fixtures for the integration suite, mirroring a small CMS
//! app: a struct block with a nested item, a list of items and an image
//! chooser, plus a page body stream over heterogeneous block types.

use std::sync::Arc;

use blockfab::{ChooserBuilder, LeafBuilder, ListBuilder, StreamBuilder, StructBuilder};
use blockfab_value::{
    CharBlock, IntegerBlock, MemoryStore, RawBlock, RecordSpec, RecordStore, StreamDef,
};

pub fn image_chooser(store: &Arc<MemoryStore>) -> ChooserBuilder {
    ChooserBuilder::new(
        Arc::clone(store) as Arc<dyn RecordStore>,
        RecordSpec::new("image", "An image"),
    )
}

/// `{label: char default "my-label", value: integer default 100}`
pub fn my_block_item() -> StructBuilder {
    StructBuilder::new()
        .with_builder("label", LeafBuilder::new(CharBlock::with_default("my-label")))
        .with_builder("value", LeafBuilder::new(IntegerBlock::with_default(100)))
}

/// `{title: char, item: struct, items: list of items, image: chooser}`
pub fn my_block(store: &Arc<MemoryStore>) -> StructBuilder {
    StructBuilder::new()
        .with_builder("title", LeafBuilder::new(CharBlock::with_default("my title")))
        .with_builder("item", my_block_item())
        .with_builder("items", ListBuilder::new(my_block_item()))
        .with_builder("image", image_chooser(store))
}

/// The page body stream: heterogeneous block types under one registry, with
/// the content system's own child-type declarations alongside.
pub fn body_stream(store: &Arc<MemoryStore>) -> StreamBuilder {
    let def = StreamDef::new()
        .with_child("struct", RawBlock::new("struct"))
        .with_child("int_array", RawBlock::new("int_array"))
        .with_child("char_array", RawBlock::new("char_array"))
        .with_child("image", RawBlock::new("image"));
    StreamBuilder::new(def)
        .with_factory("struct", my_block(store))
        .with_factory("int_array", ListBuilder::new(LeafBuilder::new(IntegerBlock::new())))
        .with_factory("char_array", ListBuilder::new(LeafBuilder::new(CharBlock::new())))
        .with_factory("image", image_chooser(store))
}
