//! `careerfit quiz` — Interactive assessment in the terminal.
//!
//! Reads one line per prompt from stdin and drives a [`Session`] through
//! every screen. `q`, `quit` or `exit` (or EOF) ends the run.

use super::{Context, bar};
use careerfit_core::{Answer, AssessmentProcessor, Catalog, Domain};
use careerfit_scoring::{Guidance, trait_insights};
use careerfit_session::{Screen, Session, SubmitOutcome, session_from_config};
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};

type CmdResult<T> = Result<T, Box<dyn std::error::Error>>;

pub async fn run(ctx: &Context) -> CmdResult<()> {
    let processor: Arc<dyn AssessmentProcessor> = Arc::new(ctx.orchestrator());
    let (session, _events) = session_from_config(processor, &ctx.config.session);
    let input = BufReader::new(tokio::io::stdin()).lines();
    let mut quiz = Quiz::new(session, ctx.catalog.clone(), input, std::io::stdout());
    quiz.run().await
}

enum Input {
    Line(String),
    Quit,
}

/// Terminal front end over a session.
pub struct Quiz<R, W> {
    session: Session,
    catalog: Arc<dyn Catalog>,
    input: Lines<R>,
    out: W,
    /// Index of the question being asked
    cursor: usize,
}

impl<R, W> Quiz<R, W>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    pub fn new(session: Session, catalog: Arc<dyn Catalog>, input: Lines<R>, out: W) -> Self {
        Self {
            session,
            catalog,
            input,
            out,
            cursor: 0,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub async fn run(&mut self) -> CmdResult<()> {
        loop {
            let keep_going = match self.session.screen() {
                Screen::Welcome => self.welcome().await?,
                Screen::Domain => self.domain().await?,
                Screen::Career => self.career().await?,
                Screen::Instructions => self.instructions().await?,
                Screen::Questions => self.questions().await?,
                Screen::Loading => return Err("session left on the loading screen".into()),
                Screen::Result => self.result().await?,
                Screen::Insights => self.insights().await?,
                Screen::NextSteps => self.next_steps().await?,
            };
            if !keep_going {
                writeln!(self.out, "👋 Goodbye!")?;
                return Ok(());
            }
        }
    }

    async fn prompt(&mut self, text: &str) -> CmdResult<Input> {
        write!(self.out, "{text} > ")?;
        self.out.flush()?;
        match self.input.next_line().await? {
            None => Ok(Input::Quit),
            Some(line) => {
                let line = line.trim().to_string();
                if matches!(line.as_str(), "q" | "quit" | "exit" | "/quit" | ":q") {
                    Ok(Input::Quit)
                } else {
                    Ok(Input::Line(line))
                }
            }
        }
    }

    async fn welcome(&mut self) -> CmdResult<bool> {
        writeln!(self.out, "🧭 CareerFit — discover how well you fit a career")?;
        writeln!(
            self.out,
            "   {} questions, about five minutes.",
            self.catalog.questions().len()
        )?;
        match self.prompt("Press Enter to start (q to quit)").await? {
            Input::Quit => Ok(false),
            Input::Line(_) => {
                self.session.start()?;
                Ok(true)
            }
        }
    }

    async fn domain(&mut self) -> CmdResult<bool> {
        writeln!(self.out, "\n📚 Choose your stream")?;
        for (i, d) in Domain::ALL.iter().enumerate() {
            let label = self
                .catalog
                .get_domain_info(*d)
                .map(|info| format!("{} — {}", info.name, info.full_name))
                .unwrap_or_else(|| d.to_string());
            writeln!(self.out, "  {}. {label}", i + 1)?;
        }

        let line = match self.prompt("Stream number or id (b = back)").await? {
            Input::Quit => return Ok(false),
            Input::Line(line) => line,
        };
        if line == "b" {
            self.session.back()?;
            return Ok(true);
        }

        let chosen = pick_index(&line, Domain::ALL.len())
            .map(|i| Domain::ALL[i])
            .or_else(|| line.parse().ok());
        match chosen {
            Some(domain) => {
                self.session.select_domain(domain)?;
            }
            None => writeln!(self.out, "  ⚠️  Unknown stream '{line}'")?,
        }
        Ok(true)
    }

    async fn career(&mut self) -> CmdResult<bool> {
        let Some(domain) = self.session.state().selected_domain else {
            self.session.back()?;
            return Ok(true);
        };
        let careers: Vec<_> = self
            .catalog
            .get_careers_by_domain(domain)
            .into_iter()
            .cloned()
            .collect();

        writeln!(self.out, "\n🎓 Careers in {}", domain.as_str().to_uppercase())?;
        for (i, c) in careers.iter().enumerate() {
            writeln!(self.out, "  {:>2}. {}", i + 1, c.name)?;
        }

        let line = match self.prompt("Career number or id (b = back)").await? {
            Input::Quit => return Ok(false),
            Input::Line(line) => line,
        };
        if line == "b" {
            self.session.back()?;
            return Ok(true);
        }

        let chosen = pick_index(&line, careers.len())
            .map(|i| careers[i].clone())
            .or_else(|| careers.iter().find(|c| c.id == line).cloned());
        match chosen {
            Some(career) => {
                self.session.select_career(career)?;
            }
            None => writeln!(self.out, "  ⚠️  Unknown career '{line}'")?,
        }
        Ok(true)
    }

    async fn instructions(&mut self) -> CmdResult<bool> {
        let name = self
            .session
            .state()
            .selected_career
            .as_ref()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        writeln!(self.out, "\n📝 Assessment for {name}")?;
        writeln!(self.out, "  Answer each statement honestly:")?;
        for option in self.catalog.answer_options() {
            writeln!(self.out, "    {} = {}", option.value, option.label)?;
        }
        writeln!(self.out, "  There are no right or wrong answers.")?;

        match self.prompt("Press Enter to begin (b = back)").await? {
            Input::Quit => Ok(false),
            Input::Line(line) if line == "b" => {
                self.session.back()?;
                Ok(true)
            }
            Input::Line(_) => {
                self.session.begin()?;
                self.cursor = 0;
                Ok(true)
            }
        }
    }

    async fn questions(&mut self) -> CmdResult<bool> {
        let total = self.catalog.questions().len();
        if self.cursor >= total {
            return self.submit().await;
        }

        let question = self.catalog.questions()[self.cursor].clone();
        let current = self
            .session
            .state()
            .answers
            .get(question.id)
            .map(|v| format!(" [{v}]"))
            .unwrap_or_default();
        writeln!(self.out, "\n  {}/{total}. {}{current}", self.cursor + 1, question.text)?;

        let line = match self.prompt("1-4 (b = back)").await? {
            Input::Quit => return Ok(false),
            Input::Line(line) => line,
        };

        if line == "b" {
            if self.cursor == 0 {
                self.session.back()?;
            } else {
                self.cursor -= 1;
            }
            return Ok(true);
        }

        match line.parse::<u8>() {
            Ok(value) if Answer::new(question.id, value).in_range() => {
                self.session.answer(Answer::new(question.id, value))?;
                self.cursor += 1;
            }
            _ => writeln!(self.out, "  ⚠️  Please answer with a number from 1 to 4")?,
        }
        Ok(true)
    }

    async fn submit(&mut self) -> CmdResult<bool> {
        writeln!(self.out, "\n⏳ Analyzing your responses...")?;
        match self.session.submit_recorded().await? {
            SubmitOutcome::Completed(_) => Ok(true),
            SubmitOutcome::Failed(message) => {
                writeln!(self.out, "  ❌ {message}")?;
                match self.prompt("Enter to retry, r to review answers").await? {
                    Input::Quit => Ok(false),
                    Input::Line(line) => {
                        if line == "r" {
                            self.cursor = 0;
                        }
                        Ok(true)
                    }
                }
            }
        }
    }

    async fn result(&mut self) -> CmdResult<bool> {
        if let Some(report) = self.session.report() {
            writeln!(self.out, "\n🎯 {}", report.career.name)?;
            writeln!(
                self.out,
                "  Compatibility: {} {}% — {}",
                bar(report.compatibility_score),
                report.compatibility_score,
                report.fit
            )?;
            for (key, value) in report.user_traits.iter() {
                writeln!(self.out, "  {:<22} {} {:>3}", key.display_name(), bar(value), value)?;
            }
        }

        match self
            .prompt("Enter = insights, r = another career, n = new assessment")
            .await?
        {
            Input::Quit => Ok(false),
            Input::Line(line) => {
                self.after_result(&line, |s| s.view_insights().map(|_| ()))?;
                Ok(true)
            }
        }
    }

    async fn insights(&mut self) -> CmdResult<bool> {
        let state = self.session.state();
        if let (Some(user), Some(career)) = (state.user_traits, state.selected_career.as_ref()) {
            writeln!(self.out, "\n🔎 Trait breakdown")?;
            writeln!(self.out, "  {:<22} {:>4} {:>7}  {:<12} Status", "Trait", "You", "Needed", "Level")?;
            for i in trait_insights(&user, &career.required_traits) {
                writeln!(
                    self.out,
                    "  {:<22} {:>4} {:>7}  {:<12} {}",
                    i.name,
                    i.user_score,
                    i.required_score,
                    i.level.to_string(),
                    i.gap
                )?;
            }
        }

        match self
            .prompt("Enter = next steps, b = back, r = another career")
            .await?
        {
            Input::Quit => Ok(false),
            Input::Line(line) if line == "b" => {
                self.session.back()?;
                Ok(true)
            }
            Input::Line(line) => {
                self.after_result(&line, |s| s.next().map(|_| ()))?;
                Ok(true)
            }
        }
    }

    async fn next_steps(&mut self) -> CmdResult<bool> {
        let state = self.session.state();
        if let Some(career) = state.selected_career.as_ref() {
            let guidance = Guidance::for_result(career, state.compatibility_score);
            writeln!(self.out, "\n🚀 Next steps ({})", guidance.fit)?;
            self.section("Strengths", &guidance.strengths)?;
            self.section("Challenges", &guidance.challenges)?;
            self.section("Skills to develop", &guidance.skills_to_develop)?;
            self.section("Activities", &guidance.recommended_activities)?;
            let focus: Vec<&str> = guidance.subject_focus.iter().map(String::as_str).collect();
            self.section("Subject focus", &focus)?;
            self.section("Similar careers", &guidance.similar_careers)?;
        }

        match self
            .prompt("Enter = finish, b = back, r = another career, n = new assessment")
            .await?
        {
            Input::Quit => Ok(false),
            Input::Line(line) if line == "b" => {
                self.session.back()?;
                Ok(true)
            }
            Input::Line(line) if line == "r" || line == "n" => {
                self.after_result(&line, |_| Ok(()))?;
                Ok(true)
            }
            Input::Line(_) => Ok(false),
        }
    }

    /// Shared handling of `r` (retake) and `n` (reset) on the result
    /// screens; anything else runs `forward`.
    fn after_result(
        &mut self,
        line: &str,
        forward: impl FnOnce(&mut Session) -> Result<(), careerfit_session::TransitionError>,
    ) -> CmdResult<()> {
        match line {
            "r" => {
                self.session.retake_for_career()?;
            }
            "n" => {
                self.session.reset();
            }
            _ => forward(&mut self.session)?,
        }
        self.cursor = 0;
        Ok(())
    }

    fn section(&mut self, title: &str, items: &[&str]) -> CmdResult<()> {
        writeln!(self.out, "  {title}:")?;
        for item in items {
            writeln!(self.out, "    • {item}")?;
        }
        Ok(())
    }
}

/// 1-based menu choice → 0-based index.
fn pick_index(line: &str, len: usize) -> Option<usize> {
    line.parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}
