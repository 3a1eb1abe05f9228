//! Host-facing alignment operators
//!
//! Two operators share one system: `object.align_bounds` spreads the
//! selection between its extremes and `object.align_padding` spreads it from
//! the 3D cursor. Both are listed in an "Align" submenu of the object menu and
//! record an undo step when they finish.

use crate::editing::align::{
    compute_layout, AlignMode, AlignOutcome, AlignmentRequest, LayoutItem,
};
use crate::editing::cursor::{reference_location, Cursor3d, HostVersion, LegacyCursorLocation};
use crate::editing::selection::{sort_by_axis, Dimensions, Selected, SelectionPlugin};
use crate::editing::undo::{
    handle_redo, handle_undo, ObjectMove, RedoEvent, UndoEvent, UndoHistory, UndoStep,
};
use bevy::log::{debug, info, warn};
use bevy::prelude::*;

/// Identity of an operator as the host displays it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperatorInfo {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

pub const ALIGN_BOUNDS_OPERATOR: OperatorInfo = OperatorInfo {
    id: "object.align_bounds",
    label: "Align between bounds",
    description: "Align objects equidistantly between most distant objects \
                  along one axis with order from another axis",
};

pub const ALIGN_PADDING_OPERATOR: OperatorInfo = OperatorInfo {
    id: "object.align_padding",
    label: "Align with padding",
    description: "Align objects equidistantly with given padding at cursor location \
                  along one axis with order from another axis",
};

/// Identifier of the "Align" submenu
pub const ALIGN_MENU_ID: &str = "object.align_menu";

/// Operator that handles a given request
pub fn operator_for(request: &AlignmentRequest) -> &'static OperatorInfo {
    match request.mode {
        AlignMode::Bounds => &ALIGN_BOUNDS_OPERATOR,
        AlignMode::Padding { .. } => &ALIGN_PADDING_OPERATOR,
    }
}

/// A submenu registered by a plugin
#[derive(Debug, Clone, PartialEq)]
pub struct MenuEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub operators: Vec<OperatorInfo>,
}

/// The host's object menu
#[derive(Resource, Debug, Default)]
pub struct ObjectMenu {
    submenus: Vec<MenuEntry>,
}

impl ObjectMenu {
    /// Append a submenu, replacing any previous entry with the same id
    pub fn append(&mut self, entry: MenuEntry) {
        self.remove(entry.id);
        self.submenus.push(entry);
    }

    fn remove(&mut self, id: &str) -> Option<MenuEntry> {
        let index = self.submenus.iter().position(|entry| entry.id == id)?;
        Some(self.submenus.remove(index))
    }

    pub fn get(&self, id: &str) -> Option<&MenuEntry> {
        self.submenus.iter().find(|entry| entry.id == id)
    }

    pub fn submenus(&self) -> &[MenuEntry] {
        &self.submenus
    }
}

/// Request to run an alignment operator on the current selection
#[derive(Event, Debug, Clone, Copy)]
pub struct RunAlignOperator {
    pub request: AlignmentRequest,
}

/// Emitted once per handled [`RunAlignOperator`]
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct AlignOperatorFinished {
    pub operator: &'static str,
    pub outcome: AlignOutcome,
    pub moved: usize,
}

/// Most recent operator result, for callers that do not read events
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct LastAlignOutcome(pub Option<AlignOperatorFinished>);

/// Selected objects as seen by the operators
type SelectedObjects<'w, 's> =
    Query<'w, 's, (Entity, &'static mut Transform, Option<&'static Dimensions>), With<Selected>>;

/// Cursor resources, one of which may be missing
#[derive(bevy::ecs::system::SystemParam)]
pub struct CursorParams<'w> {
    version: Option<Res<'w, HostVersion>>,
    cursor: Option<Res<'w, Cursor3d>>,
    legacy: Option<Res<'w, LegacyCursorLocation>>,
}

impl CursorParams<'_> {
    fn location(&self) -> Vec3 {
        let version = self.version.as_deref().copied().unwrap_or_default();
        reference_location(version, self.cursor.as_deref(), self.legacy.as_deref())
    }
}

/// System running queued alignment operators
pub fn run_align_operators(
    mut requests: EventReader<RunAlignOperator>,
    mut objects: SelectedObjects,
    cursor: CursorParams,
    mut history: ResMut<UndoHistory>,
    mut finished: EventWriter<AlignOperatorFinished>,
    mut last_outcome: ResMut<LastAlignOutcome>,
) {
    for RunAlignOperator { request } in requests.read() {
        let operator = operator_for(request);
        debug!("[ALIGN] Running {} with {:?}", operator.id, request);

        let (outcome, step) = execute(request, operator, &mut objects, cursor.location());
        let moved = step.as_ref().map_or(0, |step| step.moves.len());
        if let Some(step) = step {
            history.push(step);
        }

        let result = AlignOperatorFinished {
            operator: operator.id,
            outcome,
            moved,
        };
        info!(
            "[ALIGN] {} {:?}, {} objects moved",
            operator.id, outcome, moved
        );
        last_outcome.0 = Some(result);
        finished.write(result);
    }
}

fn execute(
    request: &AlignmentRequest,
    operator: &OperatorInfo,
    objects: &mut SelectedObjects,
    cursor: Vec3,
) -> (AlignOutcome, Option<UndoStep>) {
    // Entity order first so equal source coordinates resolve the same way every run
    let mut selection: Vec<(Entity, Vec3, Dimensions)> = objects
        .iter()
        .map(|(entity, transform, dimensions)| {
            (entity, transform.translation, dimensions.copied().unwrap_or_default())
        })
        .collect();
    selection.sort_by_key(|(entity, _, _)| *entity);
    sort_by_axis(&mut selection, request.source, |(_, location, _)| *location);

    let items: Vec<LayoutItem> = selection
        .iter()
        .map(|(_, location, size)| {
            LayoutItem::new(request.target.get(*location), size.along(request.target))
        })
        .collect();

    let layout = match compute_layout(&items, request, request.target.get(cursor)) {
        Ok(layout) => layout,
        Err(err) if err.is_cancellation() => {
            debug!("[ALIGN] {} cancelled: {}", operator.id, err);
            return (AlignOutcome::Cancelled, None);
        }
        Err(err) => {
            warn!("[ALIGN] {} rejected: {}", operator.id, err);
            return (AlignOutcome::Cancelled, None);
        }
    };

    let mut moves = Vec::with_capacity(selection.len());
    for ((entity, before, _), coordinate) in selection.iter().zip(layout) {
        let Ok((_, mut transform, _)) = objects.get_mut(*entity) else {
            continue;
        };
        request.target.set(&mut transform.translation, coordinate);
        moves.push(ObjectMove {
            entity: *entity,
            before: *before,
            after: transform.translation,
        });
    }

    let step = (!moves.is_empty()).then(|| UndoStep {
        label: operator.label.to_string(),
        moves,
    });
    (AlignOutcome::Finished, step)
}

/// Registers the alignment operators, their menu and undo support
pub struct AlignPlugin;

impl Plugin for AlignPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<SelectionPlugin>() {
            app.add_plugins(SelectionPlugin);
        }

        app.add_event::<RunAlignOperator>()
            .add_event::<AlignOperatorFinished>()
            .add_event::<UndoEvent>()
            .add_event::<RedoEvent>()
            .init_resource::<UndoHistory>()
            .init_resource::<LastAlignOutcome>()
            .init_resource::<HostVersion>()
            .init_resource::<ObjectMenu>()
            .add_systems(
                Update,
                (run_align_operators, handle_undo, handle_redo).chain(),
            );

        app.world_mut()
            .resource_mut::<ObjectMenu>()
            .append(MenuEntry {
                id: ALIGN_MENU_ID,
                label: "Align",
                operators: vec![ALIGN_BOUNDS_OPERATOR, ALIGN_PADDING_OPERATOR],
            });
        debug!("Align operators registered");
    }
}
