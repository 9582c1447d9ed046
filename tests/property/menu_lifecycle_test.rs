//! Property-based tests for the move-menu lifecycle.
//!
//! For arbitrary interaction sequences the menu must be open exactly after
//! an odd-numbered open trigger with no intervening close, the document
//! listener must be registered if and only if the menu is open, and every
//! selection made while open must reach the host exactly once.

use std::sync::Arc;

use proptest::prelude::*;
use shelfmark::card::move_menu::PointerListenerRegistry;
use shelfmark::card::{BookmarkCard, CardHost};

#[derive(Debug, Clone, Copy)]
enum MenuOp {
    Toggle,
    OutsidePointer,
    InsidePointer,
    SelectFolder,
    SelectUnfiled,
}

fn arb_op() -> impl Strategy<Value = MenuOp> {
    prop_oneof![
        Just(MenuOp::Toggle),
        Just(MenuOp::OutsidePointer),
        Just(MenuOp::InsidePointer),
        Just(MenuOp::SelectFolder),
        Just(MenuOp::SelectUnfiled),
    ]
}

#[derive(Default)]
struct CountingHost {
    moves: Vec<Option<String>>,
}

impl CardHost for CountingHost {
    fn delete_bookmark(&mut self, _id: &str) {}

    fn toggle_favorite(&mut self, _id: &str, _currently_favorite: bool) {}

    fn move_bookmark(&mut self, _bookmark_id: &str, folder_id: Option<&str>) {
        self.moves.push(folder_id.map(str::to_string));
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn listener_registered_iff_open_for_any_sequence(ops in prop::collection::vec(arb_op(), 0..60)) {
        let listeners = Arc::new(PointerListenerRegistry::new());
        let mut card = BookmarkCard::new("bm", listeners.clone());
        let mut host = CountingHost::default();

        let mut expect_open = false;
        let mut expect_moves = 0usize;

        for op in ops {
            match op {
                MenuOp::Toggle => {
                    card.toggle_menu();
                    expect_open = !expect_open;
                }
                MenuOp::OutsidePointer => {
                    card.pointer_down(false);
                    expect_open = false;
                }
                MenuOp::InsidePointer => {
                    card.pointer_down(true);
                }
                MenuOp::SelectFolder => {
                    if expect_open {
                        expect_moves += 1;
                        expect_open = false;
                    }
                    card.select_entry(Some("f1"), &mut host);
                }
                MenuOp::SelectUnfiled => {
                    if expect_open {
                        expect_moves += 1;
                        expect_open = false;
                    }
                    card.select_entry(None, &mut host);
                }
            }

            prop_assert_eq!(card.menu_open(), expect_open);
            prop_assert_eq!(listeners.active_count(), expect_open as usize);
            prop_assert_eq!(host.moves.len(), expect_moves);
        }

        // Teardown releases any still-held subscription.
        drop(card);
        prop_assert_eq!(listeners.active_count(), 0);
    }

    #[test]
    fn selection_payload_matches_the_chosen_entry(folder in prop::option::of("[a-z0-9-]{1,12}")) {
        let listeners = Arc::new(PointerListenerRegistry::new());
        let mut card = BookmarkCard::new("bm", listeners);
        let mut host = CountingHost::default();

        card.toggle_menu();
        card.select_entry(folder.as_deref(), &mut host);

        prop_assert_eq!(host.moves.len(), 1);
        prop_assert_eq!(host.moves[0].clone(), folder);
        prop_assert!(!card.menu_open());
    }
}
