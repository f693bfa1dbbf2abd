use forward_list::{forward_list, ForwardList, ListError};
use log::info;

fn main() -> Result<(), ListError> {
    pretty_env_logger::init();

    let mut list: ForwardList<u32> = ForwardList::new();
    let mut match_list: ForwardList<u32> = ForwardList::new();
    let mut unmatch_list: ForwardList<u32> = ForwardList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    for i in 1..12 {
        list.push_front(i);
        match_list.push_front(i);
        if i % 2 == 0 {
            unmatch_list.push_front(i);
        }
    }
    let clone_list = list.clone();
    println!("{}", list);
    println!("list size: {}", list.len());
    println!("top element: {:?}", list.pop_front());
    println!("{}", list);
    println!("Cloned list: {}", clone_list);
    println!("Match list: {}", clone_list == match_list);
    println!("Unmatch list: {}", clone_list == unmatch_list);
    println!("Cloned list sorts before list: {}", clone_list < list);

    let mut cursor = list.cursor_before_begin_mut();
    cursor.insert_after(100)?;
    cursor.move_next()?;
    let removed = cursor.erase_after()?;
    info!("replaced {:?} after the new head", removed);
    println!("{}", list);

    let mut other_list = forward_list![];
    for mut val in list {
        val += 1;
        other_list.push_back(val);
    }
    for val in &other_list {
        print!("{} ", val);
    }
    println!();

    print!("{}", other_list.details());
    other_list.log_details();
    Ok(())
}
