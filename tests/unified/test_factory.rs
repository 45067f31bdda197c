use defaultmap::map::DefaultMap;
use expect_test::expect;
use std::cell::Cell;
use std::fmt::Write;
use std::rc::Rc;
use std::writeln;

#[test]
fn test_factory_calls() -> Result<(), std::fmt::Error> {
  let mut s = String::new();
  let mut t = DefaultMap::<u64, u64>::new();
  let n = Rc::new(Cell::new(0u64));

  let c = n.clone();
  t.set_factory(move || { c.set(c.get() + 1); 0 });

  let _ = t.get_insert(1, 10);

  writeln!(s, "{:?} <- calls", n.get())?;

  let _ = t.get_or_default(1).unwrap();

  writeln!(s, "{:?} <- calls", n.get())?;

  let _ = t.get_or_default(2).unwrap();

  writeln!(s, "{:?} <- calls", n.get())?;

  let _ = t.get_or_default(2).unwrap();
  let _ = t.get_or_default(2).unwrap();

  writeln!(s, "{:?} <- calls", n.get())?;

  let _ = t.get_or_insert_with(3, || 30);

  writeln!(s, "{:?} <- calls", n.get())?;
  writeln!(s, "{:?} <- t", t)?;

  expect![[r#"
      0 <- calls
      0 <- calls
      1 <- calls
      1 <- calls
      1 <- calls
      {1: 10, 2: 0, 3: 30} <- t
  "#]].assert_eq(&s);

  Ok(())
}

#[test]
fn test_take_factory() -> Result<(), std::fmt::Error> {
  let mut s = String::new();
  let mut t = DefaultMap::<u64, Vec<u64>>::with_factory(Vec::new);

  t.get_or_default(1).unwrap().push(11);

  let f = t.take_factory();

  writeln!(s, "{:?} <- f.is_some()", f.is_some())?;
  writeln!(s, "{:?} <- t.has_factory()", t.has_factory())?;
  writeln!(s, "{:?} <- t.get_or_default(2)", t.get_or_default(2))?;
  writeln!(s, "{:?} <- t.get_or_default(1)", t.get_or_default(1))?;
  writeln!(s, "{:?} <- t", t)?;

  let mut f = f.unwrap();

  writeln!(s, "{:?} <- f()", f())?;

  t.set_factory(f);

  writeln!(s, "{:?} <- t.has_factory()", t.has_factory())?;
  writeln!(s, "{:?} <- t.get_or_default(2)", t.get_or_default(2))?;
  writeln!(s, "{:?} <- t", t)?;

  expect![[r#"
      true <- f.is_some()
      false <- t.has_factory()
      Err(NoFactoryError) <- t.get_or_default(2)
      Ok([11]) <- t.get_or_default(1)
      {1: [11]} <- t
      [] <- f()
      true <- t.has_factory()
      Ok([]) <- t.get_or_default(2)
      {1: [11], 2: []} <- t
  "#]].assert_eq(&s);

  Ok(())
}

#[test]
fn test_reassign_factory() -> Result<(), std::fmt::Error> {
  let mut s = String::new();
  let mut t = DefaultMap::<u64, u64>::with_factory(|| 1);

  let _ = t.get_or_default(1).unwrap();

  t.set_factory(|| 2);

  let _ = t.get_or_default(2).unwrap();

  let mut k = 100;
  t.set_factory(move || { k += 1; k });

  let _ = t.get_or_default(3).unwrap();
  let _ = t.get_or_default(4).unwrap();

  writeln!(s, "{:?} <- t", t)?;

  expect![[r#"
      {1: 1, 2: 2, 3: 101, 4: 102} <- t
  "#]].assert_eq(&s);

  Ok(())
}

#[test]
fn test_stable_slot() -> Result<(), std::fmt::Error> {
  let mut s = String::new();
  let mut t = DefaultMap::<u64, Vec<u64>>::with_factory(Vec::new);

  t.get_or_default(12).unwrap().push(42);

  let p = t.get_or_default(12).unwrap() as *mut Vec<u64>;
  let q = t.get_or_default(12).unwrap() as *mut Vec<u64>;

  writeln!(s, "{:?} <- p == q", p == q)?;
  writeln!(s, "{:?} <- t", t)?;

  expect![[r#"
      true <- p == q
      {12: [42]} <- t
  "#]].assert_eq(&s);

  Ok(())
}
