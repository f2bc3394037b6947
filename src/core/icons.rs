// SPDX-License-Identifier: MPL-2.0

use cosmic::widget::icon;
use std::collections::HashMap;
use std::sync::{Mutex, OnceLock};

pub(crate) static ICON_CACHE: OnceLock<Mutex<IconCache>> = OnceLock::new();

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct IconCacheKey {
    name: &'static str,
    size: u16,
}

pub struct IconCache {
    cache: HashMap<IconCacheKey, icon::Handle>,
}

impl IconCache {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
        }
    }

    pub fn get(&mut self, name: &'static str, size: u16) -> icon::Icon {
        let handle = self
            .cache
            .entry(IconCacheKey { name, size })
            .or_insert_with(|| icon::from_name(name).size(size).handle())
            .clone();
        icon::icon(handle).size(size)
    }
}

pub fn get_icon(name: &'static str, size: u16) -> icon::Icon {
    match ICON_CACHE.get_or_init(|| Mutex::new(IconCache::new())).lock() {
        Ok(mut icon_cache) => icon_cache.get(name, size),
        Err(poisoned) => poisoned.into_inner().get(name, size),
    }
}
