use contiguous_vector::collections::contiguous::Vector;
use contiguous_vector::vector;

fn main() {
    println!("\n[Construction]\n");

    let mut v1: Vector<i32> = Vector::with_len(5);
    assert_eq!((v1.len(), v1.cap()), (5, 5));
    println!("{:?}", v1);

    let mut v2 = vector![1, 2, 3];
    assert_eq!(v2, [1, 2, 3]);

    let v3 = Vector::from_cursors(v2.begin(), v2.end());
    assert_eq!(v3.len(), 3);
    assert_eq!(v3[2], 3);

    let v4 = Vector::from_elem(10, 4);
    assert_eq!(v4.len(), 4);
    assert_eq!((v4.front(), v4.back()), (Some(&10), Some(&10)));
    println!("{:?}", v4);

    println!("\n[Push and Pop]\n");

    v2.push(4);
    assert_eq!(v2.back(), Some(&4));
    println!("{:?}", v2);

    assert_eq!(v2.pop(), Some(4));
    assert_eq!(v2.back(), Some(&3));
    println!("{:?}", v2);

    println!("\n[Resize and Reserve]\n");

    v1.resize(10);
    assert_eq!(v1.len(), 10);
    v1.reserve(20);
    assert_eq!(v1.cap(), 20);
    println!("{:?}", v1);
    v1.shrink_to_fit();
    assert_eq!(v1.cap(), 10);
    println!("{:?}", v1);

    println!("\n[Element Access]\n");

    v2[1] = 99;
    assert_eq!(v2.at(1), Ok(&99));

    match v2.at(10) {
        Ok(value) => panic!("Index 10 shouldn't be accessible, found {value}"),
        Err(error) => println!("Out of range error returned as expected: {error}"),
    }

    println!("\n[Cursors]\n");

    let mut it = v2.begin();
    assert_eq!(it.get(), Some(&1));
    it.move_next();
    assert_eq!(it.get(), Some(&99));
    println!("{:?}", it);

    println!("\n[Insert and Erase]\n");

    let index = (v2.begin() + 1).index();
    v2.insert(index, 42);
    assert_eq!(v2[1], 42);
    println!("{}", v2);

    v2.erase(index);
    assert_eq!(v2[1], 99);
    println!("{}", v2);

    println!("\n[Emplace]\n");

    v2.emplace(55);
    assert_eq!(v2.back(), Some(&55));
    println!("{}", v2);

    println!("\n[Clear]\n");

    v2.clear();
    assert!(v2.is_empty());
    assert_eq!(v2.len(), 0);
    println!("{:?}", v2);

    println!("\nAll checks passed successfully!");
}
