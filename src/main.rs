use std::cell::Cell;
use std::rc::Rc;

use enumerable_lib::collections::{Dictionary, Enumerable, Flow, List, Queue};
use enumerable_lib::event::{Delegate, Event};
use enumerable_lib::text::{join, join_with};

fn main() {
    println!("\n[List]\n");

    let mut list = List::from([4, 8, 15, 16, 23, 42]);
    list.add(108);
    println!("{list}");
    println!("{list:?}");

    println!("evens: {}", join(&list.filter(|i| *i % 2 == 0), ", "));
    println!("squares: {}", join(&list.select(|i| i * i), ", "));
    println!("reversed: {}", list.reverse());
    println!("first odd: {:?}", list.first_where(|i| *i % 2 == 1));
    println!("last over 100: {:?}", list.last_where(|i| *i > 100));
    println!("first over 1000, or 0: {}", list.first_where_or(|i| *i > 1000, &0));

    let mut running = 0;
    list.until(|item, index| {
        running += *item;
        println!("  [{index}] running total {running}");
        if running > 30 { Flow::Break } else { Flow::Continue }
    });

    println!("\n[Queue]\n");

    let mut queue: Queue<&str> = ["parse", "check", "emit"].into_iter().collect();
    println!("{queue}");
    while let Some(stage) = queue.dequeue() {
        println!("  running {stage}, {} left", queue.len());
    }
    println!("empty dequeue: {:?}", queue.dequeue());

    println!("\n[Dictionary]\n");

    let mut dict = Dictionary::new();
    dict.put("a", 1);
    dict.put("b", 2);
    println!("overwritten: {:?}", dict.put("a", 3));
    println!("{dict}");
    println!("{dict:?}");
    println!("{}", join_with(&dict, "; ", |pair| format!("{}={}", pair.key, pair.value)));

    let zipped = dict.zip(&List::from(['x']), |pair, letter| {
        format!("{:?}/{:?}", pair.map(|pair| *pair.key), letter)
    });
    println!("zipped: {zipped}");

    println!("\n[Event]\n");

    let total = Rc::new(Cell::new(0));
    let mut on_score: Event<u32> = Event::new();

    let counter = Rc::clone(&total);
    let scorer = on_score.subscribe(Delegate::new(move |points: &u32| {
        counter.set(counter.get() + points);
    }));
    on_score.subscribe(Delegate::new(|points: &u32| println!("  scored {points}")));

    on_score.dispatch(&10);
    on_score.dispatch(&5);
    on_score.unsubscribe(&scorer);
    on_score.dispatch(&1000);
    println!("total: {}", total.get());
    println!("{on_score:?}");
}
