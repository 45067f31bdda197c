#![allow(missing_docs)]

use defaultmap::map::DefaultMap;
use defaultmap::map::Factory;
use defaultmap::map::NoFactoryError;
use defaultmap::map;

#[inline(never)]
pub fn new() -> DefaultMap<u64, u32> {
  return DefaultMap::new();
}

#[inline(never)]
pub fn with_factory() -> DefaultMap<u64, u32> {
  return DefaultMap::with_factory(|| 0);
}

#[inline(never)]
pub fn has_factory(t: &DefaultMap<u64, u32>) -> bool {
  return t.has_factory();
}

#[inline(never)]
pub fn set_factory(t: &mut DefaultMap<u64, u32>) {
  t.set_factory(|| 0);
}

#[inline(never)]
pub fn take_factory(t: &mut DefaultMap<u64, u32>) -> Option<Factory<u32>> {
  return t.take_factory();
}

#[inline(never)]
pub fn len(t: &DefaultMap<u64, u32>) -> usize {
  return t.len();
}

#[inline(never)]
pub fn is_empty(t: &DefaultMap<u64, u32>) -> bool {
  return t.is_empty();
}

#[inline(never)]
pub fn contains_key(t: &DefaultMap<u64, u32>, k: u64) -> bool {
  return t.contains_key(&k);
}

#[inline(never)]
pub fn get(t: &DefaultMap<u64, u32>, k: u64) -> Option<&u32> {
  return t.get(&k);
}

#[inline(never)]
pub fn get_value(t: &DefaultMap<u64, u32>, k: u64) -> u32 {
  return match t.get(&k) { None => 0, Some(v) => *v, };
}

#[inline(never)]
pub fn get_mut(t: &mut DefaultMap<u64, u32>, k: u64) -> Option<&mut u32> {
  return t.get_mut(&k);
}

#[inline(never)]
pub fn get_or_default(t: &mut DefaultMap<u64, u32>, k: u64) -> Result<&mut u32, NoFactoryError> {
  return t.get_or_default(k);
}

#[inline(never)]
pub fn get_or_insert_with(t: &mut DefaultMap<u64, u32>, k: u64) -> &mut u32 {
  return t.get_or_insert_with(k, || 0);
}

#[inline(never)]
pub fn get_insert(t: &mut DefaultMap<u64, u32>, k: u64, v: u32) -> Option<u32> {
  return t.get_insert(k, v);
}

#[inline(never)]
pub fn insert(t: &mut DefaultMap<u64, u32>, k: u64, v: u32) {
  t.insert(k, v);
}

#[inline(never)]
pub fn get_remove(t: &mut DefaultMap<u64, u32>, k: u64) -> Option<u32> {
  return t.get_remove(&k);
}

#[inline(never)]
pub fn remove(t: &mut DefaultMap<u64, u32>, k: u64) {
  t.remove(&k);
}

#[inline(never)]
pub fn clear(t: &mut DefaultMap<u64, u32>) {
  t.clear();
}

#[inline(never)]
pub fn reset(t: &mut DefaultMap<u64, u32>) {
  t.reset();
}

#[inline(never)]
pub fn index(t: &DefaultMap<u64, u32>, k: u64) -> &u32 {
  return &t[&k];
}

#[inline(never)]
pub fn index_mut(t: &mut DefaultMap<u64, u32>, k: u64) -> &mut u32 {
  return &mut t[&k];
}

#[inline(never)]
pub fn capacity(t: &DefaultMap<u64, u32>) -> usize {
  return map::internal::capacity(t);
}

fn main() {
  std::hint::black_box(new);
  std::hint::black_box(capacity);
}
