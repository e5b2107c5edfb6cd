//! Benchmarks for the Msg → Update loop on large boards
//!
//! Run with: cargo bench drop_resolution

use procboard::messages::{DragMsg, DropMsg, DropTarget, Msg};
use procboard::model::{BoardModel, ItemId, Mode, Process, ProcessId, ProcessItem};
use procboard::update::update;

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

/// `processes` processes of `slots` slots, every other slot filled
fn make_model(processes: usize, slots: usize) -> BoardModel {
    let processes = (0..processes)
        .map(|p| {
            let items = (0..slots)
                .map(|s| {
                    (s % 2 == 0).then(|| {
                        ProcessItem::prototype(format!("item {}", s), "")
                            .with_id(ItemId::new(format!("{}-{}", p, s)))
                    })
                })
                .collect();
            Process::new(format!("process {}", p))
                .with_id(ProcessId::new(p.to_string()))
                .with_slots(items)
        })
        .collect();
    BoardModel::new(Mode::Editor).with_processes(processes)
}

fn start_drag(model: &mut BoardModel, process: usize, slot: usize) {
    let process_id = ProcessId::new(process.to_string());
    if let Some(item) = model.item_at(&process_id, slot).cloned() {
        update(
            model,
            Msg::Drag(DragMsg::StartItem {
                process_id,
                item,
                item_index: slot,
            }),
        );
    }
}

#[divan::bench(args = [10, 100, 1000])]
fn swap_first_and_last_process(bencher: divan::Bencher, processes: usize) {
    let mut model = make_model(processes, 20);
    let last = processes - 1;

    bencher.bench_local(|| {
        start_drag(&mut model, 0, 0);
        let target_id = ProcessId::new(last.to_string());
        if let Some(item) = model.item_at(&target_id, 0).cloned() {
            let cmd = update(
                &mut model,
                Msg::Drop(DropMsg::Item(DropTarget::ProcessItem {
                    process_id: target_id,
                    item,
                    slot_index: 0,
                })),
            );
            divan::black_box(cmd);
        }
    });
}

#[divan::bench(args = [10, 100, 1000])]
fn hover_toggle(bencher: divan::Bencher, processes: usize) {
    let mut model = make_model(processes, 20);
    start_drag(&mut model, 0, 0);
    let mut targeted = false;

    bencher.bench_local(|| {
        targeted = !targeted;
        divan::black_box(update(
            &mut model,
            Msg::Drag(DragMsg::SetTargeting(targeted)),
        ));
    });
}
