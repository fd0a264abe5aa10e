/// Presentation seams — the renderer and UI surfaces the engine drives.
///
/// The engine never looks inside rendering: it registers opaque handles,
/// asks for frames, and pushes text at surfaces. Hosts implement these
/// traits over their actual graphics/UI stack; the `Null*` and `Recording*`
/// implementations here keep the engine runnable headless and observable
/// in tests.
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::schema::chapter::ChapterId;
use crate::schema::content::QuizQuestion;

/// Newtype wrapper for scene-graph handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SceneHandle(pub u64);

/// Newtype wrapper for camera handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CameraHandle(pub u64);

/// Newtype wrapper for visual node handles (one per character tableau).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle(pub u64);

/// The rendering collaborator.
pub trait Renderer {
    fn add_node(&mut self, scene: SceneHandle, node: NodeHandle);
    fn remove_node(&mut self, scene: SceneHandle, node: NodeHandle);
    fn render(&mut self, scene: SceneHandle, camera: CameraHandle);
    fn resize(&mut self, width: u32, height: u32);
}

/// One recorded renderer call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderEvent {
    AddNode(SceneHandle, NodeHandle),
    RemoveNode(SceneHandle, NodeHandle),
    Render(SceneHandle, CameraHandle),
    Resize(u32, u32),
}

/// Renderer that discards everything.
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn add_node(&mut self, _scene: SceneHandle, _node: NodeHandle) {}
    fn remove_node(&mut self, _scene: SceneHandle, _node: NodeHandle) {}
    fn render(&mut self, _scene: SceneHandle, _camera: CameraHandle) {}
    fn resize(&mut self, _width: u32, _height: u32) {}
}

/// Renderer that records every call for assertions.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub events: Vec<RenderEvent>,
}

impl Renderer for RecordingRenderer {
    fn add_node(&mut self, scene: SceneHandle, node: NodeHandle) {
        self.events.push(RenderEvent::AddNode(scene, node));
    }

    fn remove_node(&mut self, scene: SceneHandle, node: NodeHandle) {
        self.events.push(RenderEvent::RemoveNode(scene, node));
    }

    fn render(&mut self, scene: SceneHandle, camera: CameraHandle) {
        self.events.push(RenderEvent::Render(scene, camera));
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.events.push(RenderEvent::Resize(width, height));
    }
}

/// Dialogue box. `advance` reports whether the shown line was acknowledged
/// by that signal — a host surface that animates text may swallow the first
/// advance to finish the animation and acknowledge on the second.
pub trait DialogSurface {
    fn show(&mut self, speaker: &str, line: &str);
    fn advance(&mut self) -> bool;
    fn hide(&mut self);
    fn is_showing(&self) -> bool;
}

/// Quiz panel. Selections arrive from the host's own click handling and
/// are drained one-shot through `take_selection`.
pub trait QuizSurface {
    fn show(&mut self, question: &QuizQuestion);
    fn take_selection(&mut self) -> Option<usize>;
    fn show_feedback(&mut self, correct: bool, correct_option: usize, explanation: Option<&str>);
    fn hide(&mut self);
    fn is_showing(&self) -> bool;
}

/// Heads-up overlay with the chapter title and key hints.
pub trait HudSurface {
    fn set_title(&mut self, title: &str);
    fn set_instructions(&mut self, instructions: &str);
    fn show(&mut self);
    fn hide(&mut self);
    fn is_showing(&self) -> bool;
}

/// Lock/completion state a menu row displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterStatus {
    Locked,
    Unlocked,
    Completed,
}

/// One selectable row of the chapter menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub id: ChapterId,
    pub title: String,
    pub status: ChapterStatus,
}

/// Chapter-select menu. Choices arrive from the host and are drained
/// one-shot through `take_choice`.
pub trait MenuSurface {
    fn show(&mut self, title: &str, entries: &[MenuEntry]);
    fn take_choice(&mut self) -> Option<ChapterId>;
    fn hide(&mut self);
    fn is_showing(&self) -> bool;
}

// Shared-handle delegation: chapters own their surfaces boxed, so tests
// keep a second handle through Rc<RefCell<_>> and inspect after the fact.

impl<S: DialogSurface> DialogSurface for Rc<RefCell<S>> {
    fn show(&mut self, speaker: &str, line: &str) {
        self.borrow_mut().show(speaker, line)
    }
    fn advance(&mut self) -> bool {
        self.borrow_mut().advance()
    }
    fn hide(&mut self) {
        self.borrow_mut().hide()
    }
    fn is_showing(&self) -> bool {
        self.borrow().is_showing()
    }
}

impl<S: QuizSurface> QuizSurface for Rc<RefCell<S>> {
    fn show(&mut self, question: &QuizQuestion) {
        self.borrow_mut().show(question)
    }
    fn take_selection(&mut self) -> Option<usize> {
        self.borrow_mut().take_selection()
    }
    fn show_feedback(&mut self, correct: bool, correct_option: usize, explanation: Option<&str>) {
        self.borrow_mut()
            .show_feedback(correct, correct_option, explanation)
    }
    fn hide(&mut self) {
        self.borrow_mut().hide()
    }
    fn is_showing(&self) -> bool {
        self.borrow().is_showing()
    }
}

impl<S: HudSurface> HudSurface for Rc<RefCell<S>> {
    fn set_title(&mut self, title: &str) {
        self.borrow_mut().set_title(title)
    }
    fn set_instructions(&mut self, instructions: &str) {
        self.borrow_mut().set_instructions(instructions)
    }
    fn show(&mut self) {
        self.borrow_mut().show()
    }
    fn hide(&mut self) {
        self.borrow_mut().hide()
    }
    fn is_showing(&self) -> bool {
        self.borrow().is_showing()
    }
}

impl<S: MenuSurface> MenuSurface for Rc<RefCell<S>> {
    fn show(&mut self, title: &str, entries: &[MenuEntry]) {
        self.borrow_mut().show(title, entries)
    }
    fn take_choice(&mut self) -> Option<ChapterId> {
        self.borrow_mut().take_choice()
    }
    fn hide(&mut self) {
        self.borrow_mut().hide()
    }
    fn is_showing(&self) -> bool {
        self.borrow().is_showing()
    }
}

/// Dialog that records shown lines and acknowledges every advance.
#[derive(Debug, Default)]
pub struct RecordingDialog {
    pub shown: Vec<(String, String)>,
    showing: bool,
}

impl DialogSurface for RecordingDialog {
    fn show(&mut self, speaker: &str, line: &str) {
        self.shown.push((speaker.to_string(), line.to_string()));
        self.showing = true;
    }

    fn advance(&mut self) -> bool {
        self.showing
    }

    fn hide(&mut self) {
        self.showing = false;
    }

    fn is_showing(&self) -> bool {
        self.showing
    }
}

/// Quiz panel that records presentations/feedback and feeds back selections
/// queued by the test.
#[derive(Debug, Default)]
pub struct RecordingQuiz {
    pub shown_prompts: Vec<String>,
    pub feedback: Vec<(bool, usize)>,
    pub selections: VecDeque<usize>,
    showing: bool,
}

impl QuizSurface for RecordingQuiz {
    fn show(&mut self, question: &QuizQuestion) {
        self.shown_prompts.push(question.prompt.clone());
        self.showing = true;
    }

    fn take_selection(&mut self) -> Option<usize> {
        self.selections.pop_front()
    }

    fn show_feedback(&mut self, correct: bool, correct_option: usize, _explanation: Option<&str>) {
        self.feedback.push((correct, correct_option));
    }

    fn hide(&mut self) {
        self.showing = false;
    }

    fn is_showing(&self) -> bool {
        self.showing
    }
}

/// HUD that records its text.
#[derive(Debug, Default)]
pub struct RecordingHud {
    pub title: String,
    pub instructions: String,
    showing: bool,
}

impl HudSurface for RecordingHud {
    fn set_title(&mut self, title: &str) {
        self.title = title.to_string();
    }

    fn set_instructions(&mut self, instructions: &str) {
        self.instructions = instructions.to_string();
    }

    fn show(&mut self) {
        self.showing = true;
    }

    fn hide(&mut self) {
        self.showing = false;
    }

    fn is_showing(&self) -> bool {
        self.showing
    }
}

/// Menu that records shown entries and feeds back queued choices.
#[derive(Debug, Default)]
pub struct RecordingMenu {
    pub shown: Vec<MenuEntry>,
    pub choices: VecDeque<ChapterId>,
    showing: bool,
}

impl MenuSurface for RecordingMenu {
    fn show(&mut self, _title: &str, entries: &[MenuEntry]) {
        self.shown = entries.to_vec();
        self.showing = true;
    }

    fn take_choice(&mut self) -> Option<ChapterId> {
        self.choices.pop_front()
    }

    fn hide(&mut self) {
        self.showing = false;
    }

    fn is_showing(&self) -> bool {
        self.showing
    }
}
