/// Chapter state machines — the playable units the director schedules.
///
/// A story chapter walks `Unloaded → Loading → Dialogue → QuizActive /
/// QuizRetry → Completed` and back out; the main menu is the degenerate
/// chapter that only lists and launches the others. All waiting is
/// tick-driven: a chapter that has nothing to do this tick does nothing.
use log::info;

use crate::core::dialogue::DialogueSequencer;
use crate::core::input::InputSnapshot;
use crate::core::quiz::{AnswerOutcome, QuizAdvance, QuizController};
use crate::core::stage::{
    CameraHandle, ChapterStatus, DialogSurface, HudSurface, MenuEntry, MenuSurface, NodeHandle,
    QuizSurface, Renderer, SceneHandle,
};
use crate::core::store::ProgressStore;
use crate::core::timer::{PacingTimer, MENU_RETURN_SECS, QUIZ_FEEDBACK_SECS};
use crate::schema::chapter::{ChapterId, SceneId};
use crate::schema::content::ChapterContent;

/// Title shown above the chapter-select menu.
pub const MENU_TITLE: &str = "Christmas Nativity Story";

/// Key hints shown in the HUD while a chapter plays.
pub const HUD_INSTRUCTIONS: &str = "Press SPACE to advance dialogue\nPress ESC to return to menu";

/// Lifecycle state of a story chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChapterState {
    Unloaded,
    Loading,
    Dialogue,
    QuizActive,
    QuizRetry,
    Completed,
}

/// Capability interface the director dispatches through. Implementations
/// request transitions by returning a target from `update`; they never
/// switch scenes themselves.
pub trait Chapter {
    fn id(&self) -> SceneId;
    fn load(&mut self, renderer: &mut dyn Renderer);
    fn activate(&mut self, store: &ProgressStore);
    fn update(
        &mut self,
        dt: f32,
        input: InputSnapshot,
        store: &mut ProgressStore,
    ) -> Option<SceneId>;
    fn render(&mut self, renderer: &mut dyn Renderer);
    fn deactivate(&mut self);
    fn unload(&mut self, renderer: &mut dyn Renderer);
    fn on_resize(&mut self, width: u32, height: u32);
}

/// The presentation surfaces a story chapter drives.
pub struct StorySurfaces {
    pub dialog: Box<dyn DialogSurface>,
    pub quiz: Box<dyn QuizSurface>,
    pub hud: Box<dyn HudSurface>,
}

impl StorySurfaces {
    /// Headless surfaces that record everything and display nothing.
    pub fn headless() -> Self {
        use crate::core::stage::{RecordingDialog, RecordingHud, RecordingQuiz};
        Self {
            dialog: Box::new(RecordingDialog::default()),
            quiz: Box::new(RecordingQuiz::default()),
            hud: Box::new(RecordingHud::default()),
        }
    }
}

fn chapter_index(id: ChapterId) -> u64 {
    ChapterId::CANONICAL_ORDER
        .iter()
        .position(|c| *c == id)
        .unwrap_or(0) as u64
}

/// One playable unit: dialogue delivery, then the gating quiz, then the
/// unlock side effects.
pub struct StoryChapter {
    id: ChapterId,
    scene: SceneHandle,
    camera: CameraHandle,
    nodes: Vec<NodeHandle>,
    sequencers: Vec<DialogueSequencer>,
    lines_delivered: usize,
    quiz: QuizController,
    state: ChapterState,
    timer: PacingTimer,
    dialog: Box<dyn DialogSurface>,
    quiz_panel: Box<dyn QuizSurface>,
    hud: Box<dyn HudSurface>,
    title: String,
    viewport: (u32, u32),
}

impl StoryChapter {
    pub fn new(id: ChapterId, content: ChapterContent, surfaces: StorySurfaces) -> Self {
        // MainMenu owns handle 0; story chapters start at 1.
        let slot = chapter_index(id) + 1;
        let nodes = (0..content.scripts.len() as u64)
            .map(|k| NodeHandle(slot * 10 + k))
            .collect();
        let sequencers = content
            .scripts
            .into_iter()
            .map(DialogueSequencer::new)
            .collect();
        Self {
            id,
            scene: SceneHandle(slot),
            camera: CameraHandle(slot),
            nodes,
            sequencers,
            lines_delivered: 0,
            quiz: QuizController::new(content.quiz),
            state: ChapterState::Unloaded,
            timer: PacingTimer::idle(),
            dialog: surfaces.dialog,
            quiz_panel: surfaces.quiz,
            hud: surfaces.hud,
            title: content.title,
            viewport: (0, 0),
        }
    }

    pub fn state(&self) -> ChapterState {
        self.state
    }

    pub fn chapter_id(&self) -> ChapterId {
        self.id
    }

    /// Last viewport size reported through `on_resize`.
    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Fetch the next unread line, alternating speakers by delivery count
    /// and falling through to whoever still has lines once the preferred
    /// speaker runs out. `None` only when every script is exhausted.
    fn next_line(&mut self) -> Option<(String, String)> {
        let count = self.sequencers.len();
        if count == 0 {
            return None;
        }
        let preferred = self.lines_delivered % count;
        for offset in 0..count {
            let seq = &mut self.sequencers[(preferred + offset) % count];
            if let Some(line) = seq.next().map(str::to_string) {
                let speaker = seq.speaker().to_string();
                self.lines_delivered += 1;
                return Some((speaker, line));
            }
        }
        None
    }

    fn begin_quiz(&mut self, store: &mut ProgressStore) {
        match self.quiz.begin() {
            Some(question) => {
                self.quiz_panel.show(question);
                self.state = ChapterState::QuizActive;
            }
            None => {
                // An empty question set gates nothing.
                store.pass_quiz(self.id);
                self.state = ChapterState::Completed;
                self.timer.start(MENU_RETURN_SECS);
            }
        }
    }

    fn step_dialogue(&mut self, input: InputSnapshot, store: &mut ProgressStore) {
        if self.dialog.is_showing() {
            if input.advance && self.dialog.advance() {
                self.dialog.hide();
            }
        } else {
            match self.next_line() {
                Some((speaker, line)) => self.dialog.show(&speaker, &line),
                None => {
                    store.complete_story(self.id);
                    self.dialog.hide();
                    self.begin_quiz(store);
                }
            }
        }
    }

    fn step_quiz(&mut self, dt: f32, store: &mut ProgressStore) {
        if self.timer.is_running() {
            if self.timer.tick(dt) {
                self.advance_quiz(store);
            }
            return;
        }
        let Some(choice) = self.quiz_panel.take_selection() else {
            return;
        };
        if let AnswerOutcome::Evaluated {
            correct,
            correct_option,
        } = self.quiz.select(choice)
        {
            let explanation = self
                .quiz
                .current_question()
                .and_then(|q| q.explanation.clone());
            self.quiz_panel
                .show_feedback(correct, correct_option, explanation.as_deref());
            self.state = if correct {
                ChapterState::QuizActive
            } else {
                ChapterState::QuizRetry
            };
            self.timer.start(QUIZ_FEEDBACK_SECS);
        }
    }

    fn advance_quiz(&mut self, store: &mut ProgressStore) {
        match self.quiz.proceed() {
            QuizAdvance::Next(_) | QuizAdvance::Restarted => {
                if let Some(question) = self.quiz.current_question() {
                    self.quiz_panel.show(question);
                }
                self.state = ChapterState::QuizActive;
            }
            QuizAdvance::Passed => {
                self.quiz_panel.hide();
                store.pass_quiz(self.id);
                self.state = ChapterState::Completed;
                self.timer.start(MENU_RETURN_SECS);
            }
            QuizAdvance::Idle => {}
        }
    }
}

impl Chapter for StoryChapter {
    fn id(&self) -> SceneId {
        SceneId::Story(self.id)
    }

    fn load(&mut self, renderer: &mut dyn Renderer) {
        self.state = ChapterState::Loading;
        self.lines_delivered = 0;
        for seq in &mut self.sequencers {
            seq.reset();
        }
        for node in &self.nodes {
            renderer.add_node(self.scene, *node);
        }
        self.hud.set_title(&self.title);
        self.hud.set_instructions(HUD_INSTRUCTIONS);
        self.hud.show();
    }

    fn activate(&mut self, _store: &ProgressStore) {
        self.state = ChapterState::Dialogue;
    }

    fn update(
        &mut self,
        dt: f32,
        input: InputSnapshot,
        store: &mut ProgressStore,
    ) -> Option<SceneId> {
        // Leaving early skips all completion side effects.
        if input.cancel && self.state != ChapterState::Unloaded {
            return Some(SceneId::MainMenu);
        }
        match self.state {
            ChapterState::Unloaded | ChapterState::Loading => None,
            ChapterState::Dialogue => {
                self.step_dialogue(input, store);
                None
            }
            ChapterState::QuizActive | ChapterState::QuizRetry => {
                self.step_quiz(dt, store);
                None
            }
            ChapterState::Completed => {
                if self.timer.tick(dt) {
                    Some(SceneId::MainMenu)
                } else {
                    None
                }
            }
        }
    }

    fn render(&mut self, renderer: &mut dyn Renderer) {
        renderer.render(self.scene, self.camera);
    }

    fn deactivate(&mut self) {
        self.dialog.hide();
        self.quiz_panel.hide();
        self.hud.hide();
    }

    fn unload(&mut self, renderer: &mut dyn Renderer) {
        for node in &self.nodes {
            renderer.remove_node(self.scene, *node);
        }
        self.timer.cancel();
        self.state = ChapterState::Unloaded;
    }

    fn on_resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height);
    }
}

/// The chapter-select menu: lists every chapter with its lock/completion
/// status and launches unlocked ones. No dialogue, no quiz, no progress
/// record of its own.
pub struct MainMenuChapter {
    scene: SceneHandle,
    camera: CameraHandle,
    menu: Box<dyn MenuSurface>,
}

impl MainMenuChapter {
    pub fn new(menu: Box<dyn MenuSurface>) -> Self {
        Self {
            scene: SceneHandle(0),
            camera: CameraHandle(0),
            menu,
        }
    }

    fn entries(store: &ProgressStore) -> Vec<MenuEntry> {
        ChapterId::CANONICAL_ORDER
            .iter()
            .map(|id| {
                let status = if store.is_completed(*id) && store.has_passed_quiz(*id) {
                    ChapterStatus::Completed
                } else if store.is_unlocked(*id) {
                    ChapterStatus::Unlocked
                } else {
                    ChapterStatus::Locked
                };
                MenuEntry {
                    id: *id,
                    title: id.title().to_string(),
                    status,
                }
            })
            .collect()
    }
}

impl Chapter for MainMenuChapter {
    fn id(&self) -> SceneId {
        SceneId::MainMenu
    }

    fn load(&mut self, _renderer: &mut dyn Renderer) {}

    fn activate(&mut self, store: &ProgressStore) {
        let entries = Self::entries(store);
        self.menu.show(MENU_TITLE, &entries);
    }

    fn update(
        &mut self,
        _dt: f32,
        _input: InputSnapshot,
        store: &mut ProgressStore,
    ) -> Option<SceneId> {
        if let Some(choice) = self.menu.take_choice() {
            if store.is_unlocked(choice) {
                return Some(SceneId::Story(choice));
            }
            info!("rejected selection of locked chapter {choice}");
        }
        None
    }

    fn render(&mut self, renderer: &mut dyn Renderer) {
        renderer.render(self.scene, self.camera);
    }

    fn deactivate(&mut self) {
        self.menu.hide();
    }

    fn unload(&mut self, _renderer: &mut dyn Renderer) {}

    fn on_resize(&mut self, _width: u32, _height: u32) {}
}
