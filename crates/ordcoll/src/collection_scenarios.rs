use pretty_assertions::assert_eq;

use crate::{
    collect, record,
    types::{Record, Value},
    Collection, List, Result,
};

#[derive(Clone, Debug, PartialEq)]
struct Person {
    name: String,
}

impl From<&str> for Person {
    fn from(name: &str) -> Self {
        Person { name: name.to_string() }
    }
}

fn one_to_nine() -> List<i32> {
    collect(1..=9)
}

fn employees() -> List<Value> {
    collect([
        record! { "name" => "Felix", "department" => "IT" },
        record! { "name" => "Xilef", "department" => "IT" },
        record! { "name" => "Budi", "department" => "HR" },
    ])
}

fn scores() -> Collection<&'static str, i32> {
    Collection::from_pairs([("Felix", 100), ("Xilef", 70), ("Orevas", 90)])
}

fn field(record: &Value, name: &str) -> Value {
    record.field(name).cloned().unwrap_or(Value::Null)
}

fn sorted<T: Ord>(mut values: Vec<T>) -> Vec<T> {
    values.sort();
    values
}

#[test]
fn test_create_and_iterate() {
    assert_eq!(collect([1, 2, 3]).to_vec(), vec![1, 2, 3]);
    for (key, value) in &one_to_nine() {
        assert_eq!(*key as i32 + 1, *value);
    }
}

#[test]
fn test_crud() -> Result<()> {
    let mut collection = List::new();
    collection.push_all([1, 2, 3]);
    assert_eq!(collection.to_vec(), vec![1, 2, 3]);

    assert_eq!(collection.pop()?, 3);
    assert_eq!(collection.to_vec(), vec![1, 2]);
    Ok(())
}

#[test]
fn test_mapping() {
    assert_eq!(collect([1, 2, 3]).map(|v, _| v * 2).to_vec(), vec![2, 4, 6]);

    let people = collect(["Felix", "Xilef"]).map_into::<Person>();
    assert_eq!(people.to_vec(), vec![Person::from("Felix"), Person::from("Xilef")]);

    let full_names = collect([("Felix", "Xilef"), ("Xilef", "Felix")])
        .map_spread(|first: &str, last: &str| Person { name: format!("{first} {last}") });
    assert_eq!(
        full_names.to_vec(),
        vec![Person::from("Felix Xilef"), Person::from("Xilef Felix")]
    );
}

#[test]
fn test_map_to_groups() {
    let result = employees().map_to_groups(|person, _| (field(person, "department"), field(person, "name")));

    let expected = Collection::from_pairs([
        (Value::from("IT"), collect([Value::from("Felix"), Value::from("Xilef")])),
        (Value::from("HR"), collect([Value::from("Budi")])),
    ]);
    assert_eq!(result, expected);
}

#[test]
fn test_zip_concat_combine() -> Result<()> {
    let zipped = collect([1, 2, 3]).zip(&collect([4, 5, 6]));
    assert_eq!(zipped.to_vec(), vec![(1, Some(4)), (2, Some(5)), (3, Some(6))]);

    let concatenated = collect([1, 2, 3]).concat(&collect([4, 5, 6]));
    assert_eq!(concatenated.to_vec(), vec![1, 2, 3, 4, 5, 6]);

    let combined = collect(["name", "country"]).combine(&collect(["Felix", "Wakanda"]))?;
    assert_eq!(combined, Collection::from_pairs([("name", "Felix"), ("country", "Wakanda")]));
    Ok(())
}

#[test]
fn test_flattening() -> Result<()> {
    let collapsed = collect([vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).collapse();
    assert_eq!(collapsed.to_vec(), one_to_nine().to_vec());

    let people = collect([
        record! { "name" => "Felix", "hobbies" => vec!["Coding", "Gaming"] },
        record! { "name" => "Xilef", "hobbies" => vec!["Eating", "Sleeping"] },
    ]);
    let hobbies = people.flat_map(|person, _| field(person, "hobbies"));
    assert_eq!(
        hobbies.to_vec(),
        vec![
            Value::from("Coding"),
            Value::from("Gaming"),
            Value::from("Eating"),
            Value::from("Sleeping")
        ]
    );
    assert_eq!(people.pluck("hobbies")?.collapse(), hobbies);
    Ok(())
}

#[test]
fn test_join() {
    let collection = collect(["Felix", "Xilef", "Orevas"]);
    assert_eq!(collection.join("-"), "Felix-Xilef-Orevas");
    assert_eq!(collection.join_with_last(", ", " and "), "Felix, Xilef and Orevas");
}

#[test]
fn test_filtering() {
    assert_eq!(
        scores().filter(|value, _| *value > 70),
        Collection::from_pairs([("Felix", 100), ("Orevas", 90)])
    );

    let evens = collect([1, 2, 3, 4, 5, 6, 7, 8]).filter(|value, _| value % 2 == 0);
    assert_eq!(sorted(evens.to_vec()), vec![2, 4, 6, 8]);
    assert_eq!(evens.keys().to_vec(), vec![1, 3, 5, 7]);
}

#[test]
fn test_partitioning() {
    let (passed, not_passed) = scores().partition(|value, _| *value > 70);
    assert_eq!(passed, Collection::from_pairs([("Felix", 100), ("Orevas", 90)]));
    assert_eq!(not_passed, Collection::from_pairs([("Xilef", 70)]));
}

#[test]
fn test_testing() {
    let collection = collect(["Felix", "Xilef", "Orevas"]);
    assert!(collection.contains(&"Xilef"));
    assert!(collection.contains_where(|value, _| *value == "Xilef"));
}

#[test]
fn test_grouping() -> Result<()> {
    let by_field = employees().group_by_field("department")?;
    let by_function = employees().group_by(|person, _| field(person, "department"));
    assert_eq!(by_field, by_function);
    assert_eq!(by_field.keys().to_vec(), vec![Value::from("IT"), Value::from("HR")]);
    assert_eq!(by_field.get(&Value::from("IT")).map(List::len), Some(2));
    assert_eq!(
        by_field.get(&Value::from("HR")).map(List::to_vec),
        Some(vec![record! { "name" => "Budi", "department" => "HR" }])
    );
    Ok(())
}

#[test]
fn test_slicing() {
    assert_eq!(sorted(one_to_nine().slice(3, None).to_vec()), vec![4, 5, 6, 7, 8, 9]);
    assert_eq!(sorted(one_to_nine().slice(3, Some(2)).to_vec()), vec![4, 5]);
}

#[test]
fn test_take() {
    let collection = one_to_nine();
    assert_eq!(collection.take(3).to_vec(), vec![1, 2, 3]);
    assert_eq!(collection.take_until(|v, _| *v == 3).to_vec(), vec![1, 2]);
    assert_eq!(collection.take_while(|v, _| *v < 3).to_vec(), vec![1, 2]);
}

#[test]
fn test_skip() {
    let collection = one_to_nine();
    assert_eq!(collection.skip(3).to_vec(), vec![4, 5, 6, 7, 8, 9]);
    assert_eq!(collection.skip_until(|v, _| *v == 3).to_vec(), vec![3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(collection.skip_while(|v, _| *v < 3).to_vec(), vec![3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn test_chunk() -> Result<()> {
    let chunks = collect(1..=10).chunk(3)?;
    let values: Vec<Vec<i32>> = chunks.values_iter().map(Collection::to_vec).collect();
    assert_eq!(values, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9], vec![10]]);
    Ok(())
}

#[test]
fn test_first_last_random() -> Result<()> {
    let collection = one_to_nine();
    assert_eq!(collection.first(), Some(&1));
    assert_eq!(collection.first_where(|v, _| *v > 5), Some(&6));
    assert_eq!(collection.last(), Some(&9));
    assert_eq!(collection.last_where(|v, _| *v < 5), Some(&4));
    assert!((1..=9).contains(collection.random()?));
    Ok(())
}

#[test]
fn test_checking_existence() {
    let collection = one_to_nine();
    assert!(collection.is_not_empty());
    assert!(!collection.is_empty());
    assert!(collection.contains(&1));
    assert!(!collection.contains(&0));
    assert!(collection.contains_where(|v, _| *v == 8));
    assert!(!collection.contains_one_item());
}

#[test]
fn test_ordering() {
    let collection = collect([1, 3, 2, 4, 5, 7, 6, 8, 9]);
    assert_eq!(collection.sort().to_vec(), vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    assert_eq!(collection.reverse().to_vec(), vec![9, 8, 6, 7, 5, 4, 2, 3, 1]);
    assert_eq!(collection.reverse().reverse(), collection);
}

#[test]
fn test_aggregate() -> Result<()> {
    let collection = one_to_nine();
    assert_eq!(collection.min()?, 1);
    assert_eq!(collection.max()?, 9);
    assert_eq!(collection.avg()?, 5.0);
    assert_eq!(collection.sum(), 45);
    Ok(())
}
