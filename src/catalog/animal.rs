use std::fmt;

/// Static description of one animal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimalRecord {
    pub name: &'static str,
    /// Sound as written on the card, e.g. "🔊 Woof! Woof!"
    pub sound: &'static str,
    /// Bare file name, resolved against the image search path at display time.
    pub image_file: &'static str,
    pub emoji: &'static str,
    pub fun_fact: &'static str,
}

impl AnimalRecord {
    /// The multi-line fact card shown in the text viewport.
    pub fn info(&self) -> String {
        format!(
            "{} {}\n\nFUN FACT: {}\n\nSOUND: {}!!!",
            self.emoji,
            self.name.to_uppercase(),
            self.fun_fact,
            self.sound.to_uppercase()
        )
    }

    pub fn button_label(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}

/// The animals available in the app, in button order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimalKind {
    Dog,
    Cat,
    Cow,
}

static RECORDS: [AnimalRecord; 3] = [
    AnimalRecord {
        name: "Dog",
        sound: "🔊 Woof! Woof!",
        image_file: "dog.png",
        emoji: "🐶",
        fun_fact:
            "Dogs are loyal and friendly animals. They love playing fetch and wagging their tails 🐾.",
    },
    AnimalRecord {
        name: "Cat",
        sound: "🔊 Meow~ Meow~",
        image_file: "cat.png",
        emoji: "🐱",
        fun_fact: "Cats are graceful and curious animals. They enjoy napping and chasing yarn 🧶.",
    },
    AnimalRecord {
        name: "Cow",
        sound: "🔊 Moo~ Moo~",
        image_file: "cow.png",
        emoji: "🐄",
        fun_fact:
            "Cows are gentle farm animals that give us milk 🥛. They love grazing on grass 🌾.",
    },
];

impl AnimalKind {
    /// All kinds in display order.
    pub const ALL: [AnimalKind; 3] = [AnimalKind::Dog, AnimalKind::Cat, AnimalKind::Cow];

    pub fn record(self) -> &'static AnimalRecord {
        &RECORDS[self.index()]
    }

    pub fn index(self) -> usize {
        match self {
            AnimalKind::Dog => 0,
            AnimalKind::Cat => 1,
            AnimalKind::Cow => 2,
        }
    }

    /// Look up a kind by its position in [`AnimalKind::ALL`].
    pub fn from_index(index: usize) -> Option<AnimalKind> {
        Self::ALL.get(index).copied()
    }

    /// Next kind, wrapping from the last back to the first.
    pub fn next(self) -> AnimalKind {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous kind, wrapping from the first to the last.
    pub fn previous(self) -> AnimalKind {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        self.record().name
    }

    pub fn sound(self) -> &'static str {
        self.record().sound
    }

    pub fn image_file_name(self) -> &'static str {
        self.record().image_file
    }

    pub fn info(self) -> String {
        self.record().info()
    }

    pub fn button_label(self) -> String {
        self.record().button_label()
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
