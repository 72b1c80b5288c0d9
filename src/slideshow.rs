//! Rotating hero slides for the default view, shown while there are no results.

use std::time::Duration;

use log::debug;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub image: String,
    pub caption: String,
}

impl Slide {
    fn new(image: &str, caption: &str) -> Self {
        Slide {
            image: image.to_string(),
            caption: caption.to_string(),
        }
    }
}

pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide::new("/assets/hero.avif", "Discover the Taste of Home"),
        Slide::new("/assets/hero2.avif", "Wholesome Meals with Simple Ingredients"),
        Slide::new("/assets/hero3.avif", "Cook Smart, Eat Fresh"),
        Slide::new("/assets/hero4.avif", "Spice Up Your Day with Easy Recipes"),
    ]
}

/// A fixed set of slides and a handle to the timer advancing through them.
pub struct Slideshow {
    slides: Vec<Slide>,
    index: watch::Receiver<usize>,
    ticker: Option<JoinHandle<()>>,
}

impl Slideshow {
    /// Show the first slide without advancing.
    pub fn new(slides: Vec<Slide>) -> Self {
        let (_, index) = watch::channel(0);
        Slideshow {
            slides,
            index,
            ticker: None,
        }
    }

    /// Start advancing one slide per `every`, wrapping around. Must be
    /// called within a tokio runtime. Replaces any running timer.
    pub fn start(&mut self, every: Duration) {
        self.stop();
        let count = self.slides.len();
        if count < 2 {
            return;
        }

        let (tx, rx) = watch::channel(*self.index.borrow());
        self.index = rx;
        self.ticker = Some(tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + every, every);
            loop {
                ticks.tick().await;
                tx.send_modify(|index| *index = (*index + 1) % count);
                debug!("Slideshow advanced to slide {}", *tx.borrow());
            }
        }));
    }

    /// Stop the timer, keeping the current slide.
    pub fn stop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }

    pub fn is_running(&self) -> bool {
        self.ticker.is_some()
    }

    pub fn index(&self) -> usize {
        *self.index.borrow()
    }

    pub fn current(&self) -> Option<&Slide> {
        self.slides.get(self.index())
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

impl Default for Slideshow {
    fn default() -> Self {
        Self::new(default_slides())
    }
}

impl Drop for Slideshow {
    fn drop(&mut self) {
        self.stop();
    }
}
