//! A minimal walkthrough of the datebook store.
//! Seeds a couple of tasks, mutates the list, and prints the resulting views.

use chrono::NaiveDate;

use datebook::TaskStore;

fn main() {
    env_logger::init();

    let mut store = TaskStore::with_sample_tasks();
    let date = NaiveDate::from_ymd_opt(2022, 7, 28).unwrap();

    print_view(&store, date, "seeded state");

    let sleep = store.insert(date, "sleep".to_string()).unwrap();
    println!("added task {}", sleep.id());
    store.toggle(sleep.id());
    print_view(&store, date, "after adding and completing 'sleep'");

    store.delete(sleep.id());
    print_view(&store, date, "after deleting 'sleep'");
}

fn print_view(store: &TaskStore, date: NaiveDate, label: &str) {
    let view = store.view(date);
    println!("{} — {} task(s) on {}:", label, view.len(), date);
    for task in &view {
        let marker = if task.done() { "x" } else { " " };
        println!("  [{}] #{} {}", marker, task.id(), task.text());
    }
    println!();
}
