use dealdesk_domain::{Entity, ID};
use std::sync::{Mutex, MutexGuard};

/// Useful functions for creating inmemory repositories

pub fn lock<T>(collection: &Mutex<Vec<T>>) -> MutexGuard<'_, Vec<T>> {
    // A panic while holding the lock cannot leave a Vec half-written
    collection.lock().unwrap_or_else(|e| e.into_inner())
}

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    lock(collection).push(val.clone());
}

pub fn bulk_insert<T: Clone>(vals: &[T], collection: &Mutex<Vec<T>>) {
    lock(collection).extend_from_slice(vals);
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    lock(collection).iter().find(|v| v.id() == val_id).cloned()
}

pub fn find_by<T: Clone, F: FnMut(&T) -> bool>(collection: &Mutex<Vec<T>>, mut compare: F) -> Vec<T> {
    lock(collection)
        .iter()
        .filter(|item| compare(*item))
        .cloned()
        .collect()
}

/// Applies `update` to the item with the given id if `compare` accepts it.
/// Returns the updated item.
pub fn update_one_if<T: Clone + Entity, F: Fn(&T) -> bool, U: FnOnce(&mut T)>(
    val_id: &ID,
    collection: &Mutex<Vec<T>>,
    compare: F,
    update: U,
) -> Option<T> {
    let mut collection = lock(collection);
    let item = collection
        .iter_mut()
        .find(|item| item.id() == val_id && compare(&**item))?;
    update(item);
    Some(item.clone())
}

/// Applies `update` to every item accepted by `compare` and returns
/// the updated items
pub fn update_many<T: Clone, F: Fn(&T) -> bool, U: Fn(&mut T)>(
    collection: &Mutex<Vec<T>>,
    compare: F,
    update: U,
) -> Vec<T> {
    let mut collection = lock(collection);
    let mut updated = Vec::new();
    for item in collection.iter_mut() {
        if compare(item) {
            update(item);
            updated.push(item.clone());
        }
    }
    updated
}
