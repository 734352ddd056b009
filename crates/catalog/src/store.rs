//! 进程级区划存储
//!
//! 解析调用拿到的是某一时刻的只读快照；追加数据时写方复制当前表、
//! 合并后整体替换快照，正在进行的解析继续使用旧快照。

use std::sync::{Arc, PoisonError, RwLock};

use once_cell::sync::Lazy;

use crate::catalog::Catalog;
use crate::region::ExtraRegionData;

static GLOBAL_STORE: Lazy<Arc<RegionStore>> = Lazy::new(|| {
    let catalog = Catalog::builtin().expect("Failed to parse builtin regions.json");
    Arc::new(RegionStore::new(catalog))
});

/// 区划存储，持有当前快照
#[derive(Debug)]
pub struct RegionStore {
    current: RwLock<Arc<Catalog>>,
}

impl RegionStore {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// 进程级共享存储，首次访问时加载内置数据集
    pub fn global() -> Arc<RegionStore> {
        Arc::clone(&*GLOBAL_STORE)
    }

    /// 当前快照
    pub fn snapshot(&self) -> Arc<Catalog> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// 追加区划数据并发布新快照
    ///
    /// 返回是否发布了新快照。
    pub fn extend(&self, extra: &ExtraRegionData) -> bool {
        if extra.is_empty() {
            return false;
        }

        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let mut next = Catalog::clone(&**guard);
        if next.extend(extra) == 0 {
            return false;
        }
        *guard = Arc::new(next);
        true
    }
}
