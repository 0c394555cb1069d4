use gloo::timers::callback::Timeout;
use quadsweep_core as game;
use game::{
    CellGlyph, DeferredTask, EventOutcome, GameConfig, GameSession, InputEvent, Renderer,
    RevealOutcome, RoundState, Scheduler, SessionView,
};
use yew::html::Scope;
use yew::prelude::*;

const MINE: &str = "💣";
const FLAG: &str = "🚩";

#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Input(InputEvent),
    Deferred(DeferredTask),
    NewGame,
}

/// Timing collaborator backed by browser timeouts. Timeouts are forgotten, the
/// session drops tasks that arrive too late.
struct TimeoutScheduler {
    link: Scope<GameView>,
}

impl Scheduler for TimeoutScheduler {
    fn schedule(&mut self, delay_ms: u32, task: DeferredTask) {
        log::trace!("scheduling {task:?} in {delay_ms}ms");
        let link = self.link.clone();
        Timeout::new(delay_ms, move || link.send_message(Msg::Deferred(task))).forget();
    }
}

/// Dumps every frame as text to the trace log.
#[derive(Default)]
struct TraceRenderer;

impl Renderer for TraceRenderer {
    fn render(&mut self, view: &SessionView) {
        log::trace!("frame:\n{view}");
    }
}

fn glyph_classes(glyph: CellGlyph) -> Classes {
    use CellGlyph::*;
    classes!(
        "cell",
        match glyph {
            Blank => classes!(),
            Count(count) => classes!("open", format!("num-{}", count)),
            Flag => classes!("flag"),
            Mine => classes!("open", "mine"),
        }
    )
}

fn glyph_text(glyph: CellGlyph) -> String {
    use CellGlyph::*;
    match glyph {
        Blank => String::new(),
        Count(count) => count.to_string(),
        Flag => FLAG.to_string(),
        Mine => MINE.to_string(),
    }
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    row: game::Coord,
    col: game::Coord,
    glyph: CellGlyph,
    callback: Callback<InputEvent>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    let CellProps {
        row,
        col,
        glyph,
        callback,
    } = props.clone();

    let onclick = {
        let callback = callback.clone();
        Callback::from(move |_: MouseEvent| {
            log::trace!("({row}, {col}) click");
            callback.emit(InputEvent::PrimaryClick((row, col)));
        })
    };

    let oncontextmenu = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        log::trace!("({row}, {col}) context menu");
        callback.emit(InputEvent::SecondaryClick((row, col)));
    });

    html! {
        <td class={glyph_classes(glyph)} {onclick} {oncontextmenu}>{glyph_text(glyph)}</td>
    }
}

#[derive(Properties, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub config: GameConfig,
    pub seed: u64,
}

pub(crate) struct GameView {
    session: GameSession,
    scheduler: TimeoutScheduler,
    renderer: TraceRenderer,
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let GameProps { config, seed } = ctx.props().clone();
        Self {
            session: GameSession::new(config, seed),
            scheduler: TimeoutScheduler {
                link: ctx.link().clone(),
            },
            renderer: TraceRenderer,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        let updated = match msg {
            Input(event) => match self.session.handle(event, &mut self.scheduler) {
                Ok(outcome) => {
                    log::debug!("{event:?}: {outcome:?}");
                    if outcome == EventOutcome::Reveal(RevealOutcome::Won) {
                        log::info!("WIN: all cells are shown or marked");
                    }
                    outcome.has_update()
                }
                Err(err) => {
                    log::warn!("rejected {event:?}: {err}");
                    false
                }
            },
            Deferred(task) => self.session.run_deferred(task),
            NewGame => {
                self.session.restart();
                true
            }
        };

        if updated {
            self.renderer.render(&self.session.view());
        }
        updated
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view = self.session.view();
        let size = view.size();
        let callback = ctx.link().callback(Msg::Input);
        let cb_safe_click = ctx.link().callback(|_: MouseEvent| Msg::Input(InputEvent::SafeClick));
        let cb_undo = ctx.link().callback(|_: MouseEvent| Msg::Input(InputEvent::Undo));
        let cb_new_game = ctx.link().callback(|_: MouseEvent| Msg::NewGame);

        let banner = match view.state {
            RoundState::Active => html! {},
            RoundState::Won => html! { <p class="win">{"Congratulations! You won the game!"}</p> },
            RoundState::Lost => html! { <p class="lose">{"Game over, restarting..."}</p> },
        };

        html! {
            <div class="quadsweep">
                <nav>
                    <aside class="lives">{format!("Lives: {}", view.lives)}</aside>
                    <button onclick={cb_new_game}>{"New game"}</button>
                    <aside class="safe-clicks">{format!("Safe clicks: {}", view.safe_clicks)}</aside>
                </nav>
                <table class="board">
                    {
                        for (0..size).map(|row| html! {
                            <tr>
                                {
                                    for (0..size).map(|col| {
                                        let glyph = view.glyph_at((row, col));
                                        let callback = callback.clone();
                                        html! {
                                            <CellView {row} {col} {glyph} {callback}/>
                                        }
                                    })
                                }
                            </tr>
                        })
                    }
                </table>
                <footer>
                    <button onclick={cb_safe_click}>{"Safe click"}</button>
                    <button onclick={cb_undo}>{"Undo"}</button>
                </footer>
                {banner}
            </div>
        }
    }
}
