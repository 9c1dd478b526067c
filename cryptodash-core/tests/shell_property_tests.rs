use cryptodash_core::{
    default_menu, Activation, DashboardShell, NavNode, NavSection, NavTree, NavTreeState,
    NoopNavigator, ShellMode, ShellSignal, ViewportController, EXPAND_ONLY, WIDE_BREAKPOINT,
};
use proptest::prelude::*;

fn all_nodes(nodes: &[NavNode], out: &mut Vec<NavNode>) {
    for node in nodes {
        out.push(node.clone());
        all_nodes(&node.children, out);
    }
}

fn menu_nodes() -> Vec<NavNode> {
    let mut out = Vec::new();
    for section in default_menu() {
        all_nodes(&section.nodes, &mut out);
    }
    out
}

fn arb_tree() -> impl Strategy<Value = Vec<NavNode>> {
    let leaf = ("[a-z]{1,6}", "/[a-z]{1,4}")
        .prop_map(|(id, target)| NavNode::leaf(id.clone(), id, "dot", target));
    leaf.prop_recursive(3, 24, 4, |inner| {
        ("[a-z]{1,6}", prop::collection::vec(inner, 1..4)).prop_map(|(id, children)| {
            NavNode::group(id.clone(), id, "folder", EXPAND_ONLY, children)
        })
    })
    .prop_map(|node| vec![node])
}

fn arb_signal() -> impl Strategy<Value = ShellSignal> {
    prop_oneof![
        (200u32..2400).prop_map(ShellSignal::Resize),
        (0usize..16).prop_map(ShellSignal::ActivateRow),
        Just(ShellSignal::ActivateSelected),
        Just(ShellSignal::SelectNext),
        Just(ShellSignal::SelectPrevious),
        Just(ShellSignal::ToggleDrawer),
        Just(ShellSignal::DismissDrawer),
    ]
}

proptest! {
    // ========================================================================
    // Activation
    // ========================================================================

    #[test]
    fn leaf_activation_sets_location_and_keeps_groups(
        pick in 0usize..64,
        toggles in prop::collection::vec("[a-z]{1,8}", 0..6),
    ) {
        let leaves: Vec<_> = menu_nodes().into_iter().filter(|n| !n.has_children()).collect();
        let leaf = &leaves[pick % leaves.len()];
        let mut state = NavTreeState::new("/crypto");
        for id in &toggles {
            state.toggle_group(id);
        }
        let before = state.expanded_group_ids().clone();

        let outcome = cryptodash_core::NavItemController::new(leaf).activate(&mut state);

        prop_assert_eq!(outcome, Activation::Navigated { target: leaf.target.clone() });
        prop_assert!(state.is_active_location(&leaf.target));
        prop_assert_eq!(state.expanded_group_ids(), &before);
    }

    #[test]
    fn double_toggle_restores_expansion(id in "[a-z]{1,8}", seeded in prop::collection::vec("[a-z]{1,8}", 0..6)) {
        let mut state = NavTreeState::new("/x");
        for other in &seeded {
            state.toggle_group(other);
        }
        let before = state.expanded_group_ids().clone();
        state.toggle_group(&id);
        state.toggle_group(&id);
        prop_assert_eq!(state.expanded_group_ids(), &before);
    }

    // ========================================================================
    // Highlighting
    // ========================================================================

    #[test]
    fn highlight_matches_target_or_descendant(nodes in arb_tree(), location in "/[a-z]{1,4}") {
        let mut tree = NavTree::new(vec![NavSection::new(None, nodes)], &location);
        // Expand everything so every node has a visible row.
        let mut index = 0;
        while index < tree.row_count() {
            let opens = tree
                .node_at(index)
                .map(|n| n.has_children() && !tree.state().is_expanded(&n.id))
                .unwrap_or(false);
            if opens {
                tree.activate_row(index);
            }
            index += 1;
        }
        prop_assert!(tree.state().is_active_location(&location));
        let rows = tree.visible_rows();
        for (i, row) in rows.iter().enumerate() {
            let node = tree.node_at(i).unwrap();
            prop_assert_eq!(row.highlighted, node.contains_target(&location));
        }
        if !tree.contains_target(&location) {
            prop_assert!(rows.iter().all(|r| !r.highlighted));
        }
    }

    // ========================================================================
    // Viewport and drawer
    // ========================================================================

    #[test]
    fn is_wide_tracks_latest_sample(widths in prop::collection::vec(0u32..4000, 1..40)) {
        let mut viewport = ViewportController::new();
        viewport.attach(None);
        for width in &widths {
            viewport.on_resize(*width);
        }
        let latest = *widths.last().unwrap();
        prop_assert_eq!(viewport.is_wide(), latest >= WIDE_BREAKPOINT);
    }

    #[test]
    fn wide_shell_never_has_open_drawer(signals in prop::collection::vec(arb_signal(), 0..60)) {
        let mut shell = DashboardShell::new(default_menu(), "/crypto", Some(900));
        for signal in signals {
            shell.handle(signal, &mut NoopNavigator);
            if shell.is_wide() {
                prop_assert!(!shell.drawer_open());
                prop_assert_eq!(shell.mode(), ShellMode::Fixed);
            } else {
                prop_assert_eq!(shell.mode(), ShellMode::Overlay);
            }
            prop_assert!(shell.selected_row() < shell.nav_rows().len());
        }
    }
}
