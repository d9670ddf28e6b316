extern crate std;

use std::string::String;
use std::vec;
use std::vec::Vec;

use crate::linked_list::{
    arena::ArenaList,
    list::LinkedList,
    sentinel::SentinelList,
    traits::List,
};

fn values<L: List<i32>>(list: &L) -> Vec<i32> {
    list.iter().copied().collect()
}

fn filled<L: List<i32> + Default>(items: &[i32]) -> L {
    let mut list = L::default();
    for &item in items {
        list.insert_end(item);
    }
    list
}

fn check_scenario<L: List<i32> + Default>() {
    let mut list = filled::<L>(&[1, 2, 3]);
    assert_eq!(list.size(), 3);
    assert_eq!(list.get_at(0), 1);
    assert_eq!(list.get_at(1), 2);
    assert_eq!(list.get_at(2), 3);
    assert_eq!(list.find(&2), 1);
    assert_eq!(list.find(&9), -1);

    list.remove_at(1);
    assert_eq!(values(&list), vec![1, 3]);
    assert_eq!(list.size(), 2);
}

fn check_head_and_tail<L: List<i32> + Default>() {
    let mut list = L::default();
    assert!(list.empty());
    assert_eq!(list.get_first(), 0);
    assert_eq!(list.get_last(), 0);

    list.insert_start(5);
    assert_eq!(list.get_first(), 5);
    list.insert_start(4);
    assert_eq!(list.get_first(), 4);
    list.insert_end(6);
    assert_eq!(list.get_last(), 6);
    assert_eq!(values(&list), vec![4, 5, 6]);

    list.remove_end();
    assert_eq!(list.get_last(), 5);
    list.remove_start();
    assert_eq!(values(&list), vec![5]);

    list.remove_start();
    assert!(list.empty());
    assert_eq!(list.size(), 0);

    // Removing from an empty list does nothing.
    list.remove_start();
    list.remove_end();
    list.remove_at(0);
    assert!(list.empty());
}

fn check_insert_at<L: List<i32> + Default>() {
    let mut list = L::default();
    // The empty list refuses every position, even zero.
    list.insert_at(1, 0);
    assert!(list.empty());

    list.insert_end(10);
    list.insert_end(30);

    list.insert_at(20, 1);
    assert_eq!(values(&list), vec![10, 20, 30]);
    assert_eq!(list.get_at(1), 20);

    list.insert_at(0, 0);
    assert_eq!(values(&list), vec![0, 10, 20, 30]);

    // One past the last position appends.
    let size = list.size() as isize;
    list.insert_at(40, size);
    assert_eq!(list.get_last(), 40);
    assert_eq!(list.size(), 5);

    list.insert_at(99, size + 2);
    list.insert_at(99, -1);
    list.insert_at(99, isize::MIN);
    assert_eq!(values(&list), vec![0, 10, 20, 30, 40]);
    assert_eq!(list.find(&99), -1);
}

fn check_remove_at<L: List<i32> + Default>() {
    let mut list = filled::<L>(&[1, 2, 3, 4]);

    list.remove_at(4);
    list.remove_at(-1);
    list.remove_at(isize::MIN);
    assert_eq!(values(&list), vec![1, 2, 3, 4]);

    list.remove_at(0);
    assert_eq!(values(&list), vec![2, 3, 4]);

    list.remove_at(2);
    assert_eq!(values(&list), vec![2, 3]);
    assert_eq!(list.get_last(), 3);

    list.remove_at(1);
    list.remove_at(0);
    assert!(list.empty());
}

fn check_reads_out_of_range<L: List<i32> + Default>() {
    let list = filled::<L>(&[7, 0, 8]);
    assert_eq!(list.get_at(-1), 0);
    assert_eq!(list.get_at(3), 0);
    // A stored default reads the same as a miss.
    assert_eq!(list.get_at(1), 0);
    assert_eq!(list.find(&0), 1);
}

fn check_find_lowest<L: List<i32> + Default>() {
    let list = filled::<L>(&[4, 2, 4, 2]);
    assert_eq!(list.find(&4), 0);
    assert_eq!(list.find(&2), 1);
    assert_eq!(L::default().find(&4), -1);
}

fn check_summary<L: List<i32> + Default>() {
    let list = filled::<L>(&[1, 2, 3]);
    let mut out = String::new();
    list.write_summary("numbers", &mut out).unwrap();
    assert_eq!(out, "numbers: size = 3, values = 1 2 3 \n");

    let empty = L::default();
    let mut out = String::new();
    empty.write_summary("none", &mut out).unwrap();
    assert_eq!(out, "none: size = 0, values = \n");
}

#[test]
fn test_scenario() {
    check_scenario::<LinkedList<i32>>();
    check_scenario::<ArenaList<i32>>();
}

#[test]
fn test_head_and_tail() {
    check_head_and_tail::<LinkedList<i32>>();
    check_head_and_tail::<ArenaList<i32>>();
}

#[test]
fn test_insert_at() {
    check_insert_at::<LinkedList<i32>>();
    check_insert_at::<ArenaList<i32>>();
}

#[test]
fn test_remove_at() {
    check_remove_at::<LinkedList<i32>>();
    check_remove_at::<ArenaList<i32>>();
}

#[test]
fn test_reads_out_of_range() {
    check_reads_out_of_range::<LinkedList<i32>>();
    check_reads_out_of_range::<ArenaList<i32>>();
}

#[test]
fn test_find_lowest() {
    check_find_lowest::<LinkedList<i32>>();
    check_find_lowest::<ArenaList<i32>>();
}

#[test]
fn test_summary() {
    check_summary::<LinkedList<i32>>();
    check_summary::<ArenaList<i32>>();
}

#[test]
fn test_summary_display_strings() {
    let mut list = LinkedList::new();
    list.insert_end(String::from("a"));
    list.insert_end(String::from("b"));
    assert_eq!(
        std::format!("{}", list.summary("words")),
        "words: size = 2, values = a b "
    );
    assert_eq!(list.get_at(5), String::new());
}
