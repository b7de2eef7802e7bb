use log::info;

use crate::capture::domain::frame_source::FrameSource;
use crate::display::domain::display_sink::{DisplayCommand, DisplaySink};
use crate::pipeline::feedback::Feedback;
use crate::pipeline::frame_analyzer::FrameAnalyzer;

/// Where feedback requests go; the binary points this at stdout.
pub type FeedbackPrinter = Box<dyn FnMut(&str)>;

/// Capture, analyze, present, handle input; repeat.
///
/// Runs until the source ends, the viewer quits or closes the window,
/// or an analysis error surfaces. Device and window teardown belongs
/// to the adapters' `Drop` impls, so it happens on every exit path,
/// including the error one.
pub struct LiveFeedbackUseCase {
    source: Box<dyn FrameSource>,
    sink: Box<dyn DisplaySink>,
    analyzer: FrameAnalyzer,
    feedback: Feedback,
    printer: FeedbackPrinter,
}

impl LiveFeedbackUseCase {
    pub fn new(
        source: Box<dyn FrameSource>,
        sink: Box<dyn DisplaySink>,
        analyzer: FrameAnalyzer,
        printer: FeedbackPrinter,
    ) -> Self {
        Self {
            source,
            sink,
            analyzer,
            feedback: Feedback::new(),
            printer,
        }
    }

    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        while self.sink.is_open() {
            let Some(mut frame) = self.source.next_frame() else {
                info!("Frame source ended; stopping");
                break;
            };
            self.analyzer.analyze(&mut frame, &mut self.feedback)?;
            self.sink.present(&frame)?;

            // Handle the whole batch before quitting so a print and a
            // quit arriving together both take effect.
            let mut quit = false;
            for command in self.sink.poll_commands() {
                match command {
                    DisplayCommand::PrintFeedback => {
                        (self.printer)(&self.feedback.console_line());
                    }
                    DisplayCommand::Quit => quit = true,
                }
            }
            if quit {
                info!("Quit requested");
                break;
            }
        }
        Ok(())
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::detection::domain::detect_params::DetectParams;
    use crate::detection::domain::region_detector::RegionDetector;
    use crate::shared::frame::Frame;
    use crate::shared::grayscale::Grayscale;
    use crate::shared::region::Region;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct ScriptedDetector {
        script: VecDeque<Vec<Region>>,
    }

    impl RegionDetector for ScriptedDetector {
        fn detect(
            &mut self,
            _image: &Grayscale,
            _params: &DetectParams,
        ) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
            Ok(self.script.pop_front().unwrap_or_default())
        }
    }

    struct FailingDetector;

    impl RegionDetector for FailingDetector {
        fn detect(
            &mut self,
            _image: &Grayscale,
            _params: &DetectParams,
        ) -> Result<Vec<Region>, Box<dyn std::error::Error>> {
            Err("detector exploded".into())
        }
    }

    struct StubSource {
        frames: VecDeque<Frame>,
        reads: Arc<Mutex<usize>>,
    }

    impl StubSource {
        fn new(count: usize) -> (Self, Arc<Mutex<usize>>) {
            let reads = Arc::new(Mutex::new(0));
            let frames = (0..count)
                .map(|i| Frame::new(vec![100u8; 100 * 100 * 3], 100, 100, i))
                .collect();
            (
                Self {
                    frames,
                    reads: reads.clone(),
                },
                reads,
            )
        }
    }

    impl FrameSource for StubSource {
        fn next_frame(&mut self) -> Option<Frame> {
            *self.reads.lock().unwrap() += 1;
            self.frames.pop_front()
        }

        fn dimensions(&self) -> (u32, u32) {
            (100, 100)
        }
    }

    struct StubSink {
        presented: Arc<Mutex<Vec<usize>>>,
        commands: VecDeque<Vec<DisplayCommand>>,
        open: bool,
    }

    impl StubSink {
        fn new(commands: Vec<Vec<DisplayCommand>>) -> (Self, Arc<Mutex<Vec<usize>>>) {
            let presented = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    presented: presented.clone(),
                    commands: commands.into(),
                    open: true,
                },
                presented,
            )
        }
    }

    impl DisplaySink for StubSink {
        fn present(&mut self, frame: &Frame) -> Result<(), Box<dyn std::error::Error>> {
            self.presented.lock().unwrap().push(frame.index());
            Ok(())
        }

        fn poll_commands(&mut self) -> Vec<DisplayCommand> {
            self.commands.pop_front().unwrap_or_default()
        }

        fn is_open(&self) -> bool {
            self.open
        }
    }

    fn detecting_analyzer() -> FrameAnalyzer {
        // One face filling the frame, one mouth in its lower half.
        let face = ScriptedDetector {
            script: VecDeque::from([vec![Region::new(0, 0, 100, 100)]]),
        };
        let mouth = ScriptedDetector {
            script: VecDeque::from([vec![Region::new(10, 10, 20, 10)]]),
        };
        FrameAnalyzer::new(Box::new(face), Box::new(mouth))
    }

    fn idle_analyzer() -> FrameAnalyzer {
        FrameAnalyzer::new(
            Box::new(ScriptedDetector::default()),
            Box::new(ScriptedDetector::default()),
        )
    }

    fn capture_printer() -> (FeedbackPrinter, Arc<Mutex<Vec<String>>>) {
        let printed: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let lines = printed.clone();
        (
            Box::new(move |line: &str| lines.lock().unwrap().push(line.to_string())),
            printed,
        )
    }

    #[test]
    fn test_runs_until_source_ends() {
        let (source, _reads) = StubSource::new(3);
        let (sink, presented) = StubSink::new(vec![]);
        let (printer, printed) = capture_printer();
        let mut use_case =
            LiveFeedbackUseCase::new(Box::new(source), Box::new(sink), idle_analyzer(), printer);

        use_case.run().unwrap();

        assert_eq!(presented.lock().unwrap().as_slice(), &[0, 1, 2]);
        assert!(printed.lock().unwrap().is_empty());
    }

    #[test]
    fn test_quit_stops_after_current_frame() {
        let (source, _reads) = StubSource::new(10);
        let (sink, presented) = StubSink::new(vec![vec![], vec![DisplayCommand::Quit]]);
        let (printer, _printed) = capture_printer();
        let mut use_case =
            LiveFeedbackUseCase::new(Box::new(source), Box::new(sink), idle_analyzer(), printer);

        use_case.run().unwrap();

        assert_eq!(presented.lock().unwrap().as_slice(), &[0, 1]);
    }

    #[test]
    fn test_print_before_any_detection() {
        let (source, _reads) = StubSource::new(1);
        let (sink, _presented) = StubSink::new(vec![vec![DisplayCommand::PrintFeedback]]);
        let (printer, printed) = capture_printer();
        let mut use_case =
            LiveFeedbackUseCase::new(Box::new(source), Box::new(sink), idle_analyzer(), printer);

        use_case.run().unwrap();

        assert_eq!(
            printed.lock().unwrap().as_slice(),
            &["Nenhuma detecção realizada para exibir.".to_string()]
        );
    }

    #[test]
    fn test_print_after_detection_reports_mean() {
        let (source, _reads) = StubSource::new(1);
        let (sink, _presented) = StubSink::new(vec![vec![DisplayCommand::PrintFeedback]]);
        let (printer, printed) = capture_printer();
        let mut use_case = LiveFeedbackUseCase::new(
            Box::new(source),
            Box::new(sink),
            detecting_analyzer(),
            printer,
        );

        use_case.run().unwrap();

        assert_eq!(
            printed.lock().unwrap().as_slice(),
            &["Cor média da boca detectada - R: 48, G: 180, B: 48".to_string()]
        );
        assert!(use_case.feedback().is_set());
    }

    #[test]
    fn test_print_and_quit_in_one_batch_both_apply() {
        let (source, _reads) = StubSource::new(5);
        let (sink, presented) = StubSink::new(vec![vec![
            DisplayCommand::PrintFeedback,
            DisplayCommand::Quit,
        ]]);
        let (printer, printed) = capture_printer();
        let mut use_case =
            LiveFeedbackUseCase::new(Box::new(source), Box::new(sink), idle_analyzer(), printer);

        use_case.run().unwrap();

        assert_eq!(printed.lock().unwrap().len(), 1);
        assert_eq!(presented.lock().unwrap().as_slice(), &[0]);
    }

    #[test]
    fn test_closed_sink_reads_nothing() {
        let (source, reads) = StubSource::new(3);
        let (mut sink, presented) = StubSink::new(vec![]);
        sink.open = false;
        let (printer, _printed) = capture_printer();
        let mut use_case =
            LiveFeedbackUseCase::new(Box::new(source), Box::new(sink), idle_analyzer(), printer);

        use_case.run().unwrap();

        assert_eq!(*reads.lock().unwrap(), 0);
        assert!(presented.lock().unwrap().is_empty());
    }

    #[test]
    fn test_analysis_error_stops_the_run() {
        let (source, _reads) = StubSource::new(3);
        let (sink, presented) = StubSink::new(vec![]);
        let (printer, _printed) = capture_printer();
        let analyzer = FrameAnalyzer::new(
            Box::new(FailingDetector),
            Box::new(ScriptedDetector::default()),
        );
        let mut use_case =
            LiveFeedbackUseCase::new(Box::new(source), Box::new(sink), analyzer, printer);

        assert!(use_case.run().is_err());
        assert!(presented.lock().unwrap().is_empty());
    }
}
