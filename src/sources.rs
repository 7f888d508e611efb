//! Built-in wisdom sources
//!
//! Every source carries quotes for each aeon level. These tables are the only
//! input to the catalog; nothing is fetched at runtime.
//!
//! "The lips of wisdom are closed, except to the ears of Understanding." - The Kybalion

use crate::types::Language;

/// `(text, attribution, encouragement)`
pub type QuoteDef = (&'static str, &'static str, &'static str);

/// Static definition of one source, buckets in `AeonLevel::ALL` order
#[derive(Debug, Clone, Copy)]
pub struct SourceDef {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub language: Language,
    pub quotes: [&'static [QuoteDef]; 5],
}

/// All built-in sources, in catalog order
pub fn built_in_sources() -> &'static [SourceDef] {
    BUILT_IN
}

static BUILT_IN: &[SourceDef] = &[
    PISTIS_SOPHIA,
    BOFH,
    TAO,
    ART_OF_WAR,
    STOIC,
    BIBLE,
    TAO_OF_PROGRAMMING,
    MURPHY,
    SHAKESPEARE,
    CONFUCIUS,
    KYBALION,
    GRACIAN,
    ENOCHIAN,
    PIRKEI_AVOT,
    PROVERBS,
    ECCLESIASTES,
    PSALMS,
];

// ============================================================================
// DEFAULT SOURCE
// ============================================================================

const PISTIS_SOPHIA: SourceDef = SourceDef {
    id: "pistis_sophia",
    name: "Pistis Sophia (Gnostic)",
    icon: "📜",
    language: Language::Default,
    quotes: [
        &[
            ("I have been cast down into the chaos, and there is no light in me.", "Pistis Sophia, Chapter 32", "Even here, the first repentance begins."),
            ("The emanations of Self-willed have surrounded me, and I am become as matter without strength.", "Pistis Sophia, Chapter 33", "Name what holds you down, then cut it loose."),
        ],
        &[
            ("O Light, I have trusted in thee; let me not be left in the darkness.", "Pistis Sophia, Chapter 35", "Keep faith with the plan while you climb."),
            ("Save me, O Light, for evil thoughts have come in unto me.", "Pistis Sophia, Chapter 32", "Guard the codebase against bad habits."),
        ],
        &[
            ("I will not cease to seek the light, even in the midst of the aeons.", "Pistis Sophia, Chapter 45", "Steady effort lifts you band by band."),
            ("The light hath become a wreath round my head, and I shall not be shaken.", "Pistis Sophia, Chapter 59", "Protect what you have already built."),
        ],
        &[
            ("The mysteries are given to those who have ceased to be afraid of them.", "Pistis Sophia, Chapter 90", "Tackle the hard parts now."),
            ("She was brought up out of the chaos and set upon the place of the thirteenth aeon.", "Pistis Sophia, Chapter 60", "You are nearly through the ascent."),
        ],
        &[
            ("Thou hast led me out of the darkness into the Treasury of the Light.", "Pistis Sophia, Chapter 81", "Celebrate, then share what you learned."),
            ("The light of the Treasury is a light that has no measure.", "Pistis Sophia, Chapter 86", "Excellence compounds; keep investing."),
        ],
    ],
};

// ============================================================================
// ENGLISH SOURCES
// ============================================================================

const BOFH: SourceDef = SourceDef {
    id: "bofh",
    name: "BOFH (Bastard Operator From Hell)",
    icon: "😈",
    language: Language::Default,
    quotes: [
        &[
            ("It's not a bug, it's a feature.", "BOFH Excuse Calendar", "Document it and ship it."),
            ("Have you tried turning it off and on again?", "BOFH Classic", "Sometimes the classics work."),
            ("The problem exists between keyboard and chair.", "BOFH Wisdom", "Check your assumptions."),
        ],
        &[
            ("We don't support that. We never have. We never will.", "BOFH Helpdesk", "Set clear boundaries."),
            ("The backup system is working perfectly. Unfortunately, the restore system isn't.", "BOFH on Backups", "Test your recovery procedures."),
        ],
        &[
            ("Whose fault is it? The network's, obviously.", "BOFH Troubleshooting", "It's always DNS."),
            ("The system isn't slow, it's just contemplating.", "BOFH on Performance", "Perception is reality."),
        ],
        &[
            ("I don't have a solution, but I do admire the problem.", "BOFH Philosophy", "Some problems are worth appreciating."),
            ("The nice thing about standards is there are so many to choose from.", "BOFH on Standards", "Pick one and stick with it."),
        ],
        &[
            ("It's not the logs that lie, it's the users.", "BOFH Truth", "Trust but verify."),
            ("The server room is my happy place. No users allowed.", "BOFH Zen", "Protect your focus time."),
        ],
    ],
};

const TAO: SourceDef = SourceDef {
    id: "tao",
    name: "Tao Te Ching (Lao Tzu)",
    icon: "☯️",
    language: Language::Default,
    quotes: [
        &[
            ("The journey of a thousand miles begins with a single step.", "Chapter 64", "Start where you are."),
            ("Nature does not hurry, yet everything is accomplished.", "Chapter 15", "Patience brings clarity."),
        ],
        &[
            ("The soft overcomes the hard. The slow overcomes the fast.", "Chapter 36", "Incremental progress wins."),
            ("To attain knowledge, add things every day. To attain wisdom, remove things every day.", "Chapter 48", "Simplify."),
        ],
        &[
            ("Act without expectation.", "Chapter 2", "Do the work for its own sake."),
            ("Knowing others is intelligence; knowing yourself is true wisdom.", "Chapter 33", "Know your strengths and limits."),
        ],
        &[
            ("The Master does nothing, yet leaves nothing undone.", "Chapter 48", "Automation is the way."),
            ("In dwelling, live close to the ground. In thinking, keep to the simple.", "Chapter 8", "Keep it simple."),
        ],
        &[
            ("Success is as dangerous as failure. Hope is as hollow as fear.", "Chapter 13", "Stay humble in victory."),
            ("Retire when the work is done; this is the way of heaven.", "Chapter 9", "Know when to ship."),
        ],
    ],
};

const ART_OF_WAR: SourceDef = SourceDef {
    id: "art_of_war",
    name: "The Art of War (Sun Tzu)",
    icon: "⚔️",
    language: Language::Default,
    quotes: [
        &[
            ("In the midst of chaos, there is also opportunity.", "Chapter 3", "Find the opening."),
            ("If you know the enemy and know yourself, you need not fear the result of a hundred battles.", "Chapter 3", "Understand the problem space."),
        ],
        &[
            ("The supreme art of war is to subdue the enemy without fighting.", "Chapter 3", "Prevention beats remediation."),
            ("Opportunities multiply as they are seized.", "Chapter 5", "Momentum builds momentum."),
        ],
        &[
            ("Strategy without tactics is the slowest route to victory.", "Chapter 6", "Plan and execute."),
            ("The quality of decision is like the well-timed swoop of a falcon.", "Chapter 5", "Act decisively."),
        ],
        &[
            ("The greatest victory is that which requires no battle.", "Chapter 3", "Design prevents bugs."),
            ("He will win who knows when to fight and when not to fight.", "Chapter 3", "Pick your battles."),
        ],
        &[
            ("Victorious warriors win first and then go to war.", "Chapter 4", "Plan before you code."),
            ("There are not more than five musical notes, yet their combinations give rise to more melodies than can ever be heard.", "Chapter 5", "Simple primitives, infinite possibilities."),
        ],
    ],
};

const STOIC: SourceDef = SourceDef {
    id: "stoic",
    name: "Stoic Philosophers",
    icon: "🏛️",
    language: Language::Default,
    quotes: [
        &[
            ("The impediment to action advances action. What stands in the way becomes the way.", "Marcus Aurelius, Meditations", "Obstacles are opportunities."),
            ("You have power over your mind, not outside events. Realize this, and you will find strength.", "Marcus Aurelius, Meditations", "Focus on what you control."),
        ],
        &[
            ("First say to yourself what you would be; and then do what you have to do.", "Epictetus, Discourses", "Define then execute."),
            ("Waste no more time arguing what a good man should be. Be one.", "Marcus Aurelius, Meditations", "Ship the code."),
        ],
        &[
            ("He suffers more than necessary, who suffers before it is necessary.", "Seneca, Letters", "Don't pre-worry."),
            ("If it is not right, do not do it; if it is not true, do not say it.", "Marcus Aurelius, Meditations", "Maintain integrity."),
        ],
        &[
            ("We suffer more in imagination than in reality.", "Seneca, Letters", "Most fears never materialize."),
            ("Difficulties strengthen the mind, as labor does the body.", "Seneca, Letters", "Challenges build skill."),
        ],
        &[
            ("Very little is needed to make a happy life.", "Marcus Aurelius, Meditations", "Simplicity is power."),
            ("How much time he gains who does not look to see what his neighbor says or does.", "Marcus Aurelius, Meditations", "Focus on your work."),
        ],
    ],
};

const BIBLE: SourceDef = SourceDef {
    id: "bible",
    name: "Bible (Proverbs & Ecclesiastes)",
    icon: "📖",
    language: Language::Default,
    quotes: [
        &[
            ("For everything there is a season, and a time for every matter under heaven.", "Ecclesiastes 3:1", "This too shall pass."),
            ("Pride goes before destruction, and a haughty spirit before a fall.", "Proverbs 16:18", "Stay humble in debugging."),
        ],
        &[
            ("The beginning of wisdom is this: Get wisdom, and whatever you get, get insight.", "Proverbs 4:7", "Learn from the error logs."),
            ("A soft answer turns away wrath, but a harsh word stirs up anger.", "Proverbs 15:1", "Be gentle in code reviews."),
        ],
        &[
            ("The hand of the diligent will rule, while the slothful will be put to forced labor.", "Proverbs 12:24", "Consistency wins."),
            ("The heart of the discerning acquires knowledge; the ears of the wise seek it out.", "Proverbs 18:15", "Keep learning."),
        ],
        &[
            ("Whatever your hand finds to do, do it with all your might.", "Ecclesiastes 9:10", "Give full effort."),
            ("Two are better than one, because they have a good reward for their toil.", "Ecclesiastes 4:9", "Collaborate."),
        ],
        &[
            ("Let another praise you, and not your own mouth; a stranger, and not your own lips.", "Proverbs 27:2", "Let your work speak."),
            ("The end of a matter is better than its beginning, and patience is better than pride.", "Ecclesiastes 7:8", "You've earned this."),
        ],
    ],
};

const TAO_OF_PROGRAMMING: SourceDef = SourceDef {
    id: "tao_of_programming",
    name: "The Tao of Programming",
    icon: "💻",
    language: Language::Default,
    quotes: [
        &[
            ("There is a time for debugging and a time for coding. Do not confuse the two.", "Book 2", "Separate concerns."),
            ("Though a program be but three lines long, someday it will have to be maintained.", "Book 4", "Write for the future."),
        ],
        &[
            ("A well-written program is its own heaven; a poorly-written program is its own hell.", "Book 1", "Quality is its own reward."),
            ("Without the wind, the grass does not move. Without software, hardware is useless.", "Book 1", "Your code matters."),
        ],
        &[
            ("The best software is invisible.", "Book 4", "Users should see results, not complexity."),
            ("A novice asked the Master: 'What is the true meaning of programming?' The Master replied: 'Eat when you are hungry. Sleep when you are tired. Code when you are ready.'", "Book 2", "Respect your rhythms."),
        ],
        &[
            ("The Master said: 'A well-designed system needs no manual.'", "Book 5", "Intuitive beats documented."),
            ("Let the programmers be many and the managers few -- then all will be productive.", "Book 7", "Trust the doers."),
        ],
        &[
            ("After three days without programming, life becomes meaningless.", "Book 2", "You're in your element."),
            ("The Master said: 'That program is good that has few bugs.'", "Book 4", "Simplicity prevails."),
        ],
    ],
};

const MURPHY: SourceDef = SourceDef {
    id: "murphy",
    name: "Murphy's Laws",
    icon: "🎲",
    language: Language::Default,
    quotes: [
        &[
            ("Anything that can go wrong will go wrong.", "Murphy's Law", "Plan for failure."),
            ("If there is a possibility of several things going wrong, the one that will cause the most damage will be the one to go wrong.", "Murphy's Law (Extreme)", "Fix the critical path first."),
        ],
        &[
            ("Nothing is as easy as it looks.", "Murphy's Law", "Pad your estimates."),
            ("Every solution breeds new problems.", "Murphy's Law", "Think second-order effects."),
        ],
        &[
            ("It is impossible to make anything foolproof because fools are so ingenious.", "Murphy's Law", "Test with real users."),
            ("The first 90% of the code accounts for the first 90% of the development time. The remaining 10% of the code accounts for the other 90%.", "Tom Cargill", "The last mile is the hardest."),
        ],
        &[
            ("The light at the end of the tunnel is just the light of an oncoming train.", "Murphy's Law", "Stay vigilant near completion."),
            ("For every action, there is an equal and opposite criticism.", "Harrison's Postulate", "Ship anyway."),
        ],
        &[
            ("If Murphy's Law can go wrong, it will.", "Murphy's Meta-Law", "Even pessimism has limits."),
            ("Blessed is he who expects nothing, for he shall not be disappointed.", "Murphy's Blessing", "Exceed low expectations."),
        ],
    ],
};

const SHAKESPEARE: SourceDef = SourceDef {
    id: "shakespeare",
    name: "William Shakespeare",
    icon: "🎭",
    language: Language::Default,
    quotes: [
        &[
            ("Hell is empty and all the devils are here.", "The Tempest, Act 1", "Face the chaos."),
            ("The fault, dear Brutus, is not in our stars, but in ourselves.", "Julius Caesar, Act 1", "Take ownership."),
        ],
        &[
            ("There is nothing either good or bad, but thinking makes it so.", "Hamlet, Act 2", "Perspective is everything."),
            ("What's past is prologue.", "The Tempest, Act 2", "Learn and move forward."),
        ],
        &[
            ("Though she be but little, she is fierce.", "A Midsummer Night's Dream, Act 3", "Small teams can be powerful."),
            ("The better part of valour is discretion.", "Henry IV Part 1, Act 5", "Know when to retreat."),
        ],
        &[
            ("We know what we are, but know not what we may be.", "Hamlet, Act 4", "Potential exceeds perception."),
            ("To thine own self be true.", "Hamlet, Act 1", "Maintain your principles."),
        ],
        &[
            ("All's well that ends well.", "All's Well That Ends Well", "Outcomes matter."),
            ("Our doubts are traitors, and make us lose the good we oft might win, by fearing to attempt.", "Measure for Measure, Act 1", "Ship it."),
        ],
    ],
};

const CONFUCIUS: SourceDef = SourceDef {
    id: "confucius",
    name: "Confucius (The Analects)",
    icon: "🎓",
    language: Language::Default,
    quotes: [
        &[
            ("Our greatest glory is not in never falling, but in rising every time we fall.", "Analects", "Get back up."),
            ("The man who moves a mountain begins by carrying away small stones.", "Analects", "Start small."),
        ],
        &[
            ("It does not matter how slowly you go as long as you do not stop.", "Analects", "Persistence wins."),
            ("Real knowledge is to know the extent of one's ignorance.", "Analects", "Acknowledge gaps."),
        ],
        &[
            ("The superior man is modest in his speech, but exceeds in his actions.", "Analects", "Let work speak."),
            ("By three methods we may learn wisdom: by reflection, which is noblest; by imitation, which is easiest; and by experience, which is the bitterest.", "Analects", "All learning is valid."),
        ],
        &[
            ("If you think in terms of a year, plant a seed; if in terms of ten years, plant trees; if in terms of 100 years, teach the people.", "Analects", "Invest in documentation."),
            ("The man of virtue makes the difficulty to be overcome his first interest; success only comes later.", "Analects", "Process over outcome."),
        ],
        &[
            ("What you do not want done to yourself, do not do to others.", "Analects", "Write code you'd want to maintain."),
            ("Only the wisest and stupidest of men never change.", "Analects", "Stay adaptable."),
        ],
    ],
};

const KYBALION: SourceDef = SourceDef {
    id: "kybalion",
    name: "The Kybalion",
    icon: "⚗️",
    language: Language::Default,
    quotes: [
        &[
            ("Nothing rests; everything moves; everything vibrates.", "The Kybalion, Principle of Vibration", "Stabilize before you optimize."),
            ("Every Cause has its Effect; every Effect has its Cause.", "The Kybalion, Principle of Cause and Effect", "Find the root cause."),
        ],
        &[
            ("Everything flows, out and in; everything has its tides.", "The Kybalion, Principle of Rhythm", "The low tide will turn."),
        ],
        &[
            ("As above, so below; as below, so above.", "The Kybalion, Principle of Correspondence", "Small modules mirror the whole system."),
            ("Everything is Dual; everything has poles.", "The Kybalion, Principle of Polarity", "Every trade-off has two sides."),
        ],
        &[
            ("The All is Mind; the Universe is Mental.", "The Kybalion, Principle of Mentalism", "Your mental model shapes the code."),
        ],
        &[
            ("When the ears of the student are ready to hear, then cometh the lips to fill them with wisdom.", "The Kybalion, Chapter 1", "Teach what you have mastered."),
        ],
    ],
};

const GRACIAN: SourceDef = SourceDef {
    id: "gracian",
    name: "Baltasar Gracián (The Art of Worldly Wisdom)",
    icon: "🎭",
    language: Language::Default,
    quotes: [
        &[
            ("Never compete with someone who has nothing to lose.", "Maxim 172", "Choose battles you can win."),
        ],
        &[
            ("Attempt easy tasks as if they were difficult, and difficult as if they were easy.", "Maxim 204", "Respect the small work."),
        ],
        &[
            ("Think with the few and speak with the many.", "Maxim 43", "Decide carefully, explain plainly."),
        ],
        &[
            ("Good things, when short, are twice as good.", "Maxim 105", "Keep it brief."),
        ],
        &[
            ("Do not wait till you are a sinking sun.", "Maxim 110", "Leave on a high note."),
        ],
    ],
};

const ENOCHIAN: SourceDef = SourceDef {
    id: "enochian",
    name: "Enochian Calls (John Dee)",
    icon: "🔮",
    language: Language::Default,
    quotes: [
        &[
            ("Move, therefore, and show yourselves: open the mysteries of your creation.", "The First Call", "Expose hidden structure."),
        ],
        &[
            ("Be friendly unto me, for I am the servant of the same your God.", "The First Call", "Work with the system, not against it."),
        ],
        &[
            ("I reign over you, saith the God of Justice, in power exalted above the firmaments of wrath.", "The First Call", "Let the architecture govern."),
        ],
        &[],
        &[
            ("The mysteries of your creation are opened, and the watchtowers stand.", "The Watchtowers", "The patterns hold; keep watch."),
        ],
    ],
};

// ============================================================================
// HEBREW SOURCES (English renderings)
// ============================================================================

const PIRKEI_AVOT: SourceDef = SourceDef {
    id: "pirkei_avot",
    name: "Pirkei Avot (Ethics of the Fathers)",
    icon: "🕎",
    language: Language::Hebrew,
    quotes: [
        &[
            ("If I am not for myself, who will be for me? And if I am only for myself, what am I? And if not now, when?", "Pirkei Avot 1:14", "Act now."),
            ("It is not your duty to finish the work, but neither are you free to neglect it.", "Pirkei Avot 2:16", "Do your part today."),
        ],
        &[
            ("Make for yourself a teacher, acquire for yourself a friend, and judge every person favorably.", "Pirkei Avot 1:6", "Build your team."),
            ("Do not say: when I have leisure I will study; perhaps you will have no leisure.", "Pirkei Avot 2:4", "Don't defer the hard work."),
        ],
        &[
            ("Who is wise? One who learns from every person.", "Pirkei Avot 4:1", "Learn from every review."),
            ("Who is mighty? One who conquers his inclination.", "Pirkei Avot 4:1", "Resist the shortcut."),
        ],
        &[
            ("Despise no one and disdain nothing, for there is no one who does not have his hour.", "Pirkei Avot 4:3", "Every component matters."),
            ("Be bold as a leopard, light as an eagle, swift as a deer, and strong as a lion.", "Pirkei Avot 5:20", "Finish with vigor."),
        ],
        &[
            ("The world stands on three things: on Torah, on service, and on acts of kindness.", "Pirkei Avot 1:2", "Keep the foundations strong."),
            ("Let your fellow's honor be as dear to you as your own.", "Pirkei Avot 2:10", "Share the credit."),
        ],
    ],
};

const PROVERBS: SourceDef = SourceDef {
    id: "proverbs",
    name: "Mishlei (Proverbs)",
    icon: "📜",
    language: Language::Hebrew,
    quotes: [
        &[
            ("A righteous man falls seven times, and rises up again.", "Proverbs 24:16", "Get back up."),
            ("Trust in the Lord with all your heart, and lean not upon your own understanding.", "Proverbs 3:5", "You don't have to know everything."),
            ("Pride goes before destruction, and a haughty spirit before a fall.", "Proverbs 16:18", "Check your assumptions."),
        ],
        &[
            ("The beginning of wisdom is: get wisdom; and with all your getting, get understanding.", "Proverbs 4:7", "Invest in learning."),
            ("A soft answer turns away wrath, but a grievous word stirs up anger.", "Proverbs 15:1", "Keep code review kind."),
            ("Iron sharpens iron, so one person sharpens another.", "Proverbs 27:17", "Pair up."),
        ],
        &[
            ("The hand of the diligent shall bear rule.", "Proverbs 12:24", "Steady effort compounds."),
            ("A good name is rather to be chosen than great riches.", "Proverbs 22:1", "Reputation is built release by release."),
            ("Commit your works unto the Lord, and your thoughts shall be established.", "Proverbs 16:3", "Commit, then follow through."),
        ],
        &[
            ("She looks well to the ways of her household, and eats not the bread of idleness.", "Proverbs 31:27", "Keep watch over what you built."),
            ("The heart of the prudent gets knowledge, and the ear of the wise seeks knowledge.", "Proverbs 18:15", "Keep listening."),
            ("Where there is no vision, the people perish.", "Proverbs 29:18", "Share the roadmap."),
        ],
        &[
            ("Who can find a woman of valor? For her price is far above rubies.", "Proverbs 31:10", "Excellence is rare. Protect it."),
            ("Happy is the one who finds wisdom, and the one who gets understanding.", "Proverbs 3:13", "Enjoy what you've learned."),
            ("Let another praise you, and not your own mouth.", "Proverbs 27:2", "Let the results speak."),
        ],
    ],
};

const ECCLESIASTES: SourceDef = SourceDef {
    id: "ecclesiastes",
    name: "Kohelet (Ecclesiastes)",
    icon: "🌅",
    language: Language::Hebrew,
    quotes: [
        &[
            ("To every thing there is a season, and a time to every purpose under the heaven.", "Ecclesiastes 3:1", "This phase will pass."),
            ("There is no new thing under the sun.", "Ecclesiastes 1:9", "Someone has solved this before."),
            ("Better is the end of a thing than the beginning thereof.", "Ecclesiastes 7:8", "Be patient with the process."),
        ],
        &[
            ("Two are better than one, because they have a good reward for their labor.", "Ecclesiastes 4:9", "Don't work alone."),
            ("Whatsoever your hand finds to do, do it with your might.", "Ecclesiastes 9:10", "Give it full effort."),
            ("He that observes the wind shall not sow.", "Ecclesiastes 11:4", "Ship before conditions are perfect."),
        ],
        &[
            ("In the day of prosperity be joyful, but in the day of adversity consider.", "Ecclesiastes 7:14", "Reflect on both."),
            ("Let your words be few.", "Ecclesiastes 5:2", "Simplify."),
            ("If the iron be blunt and he does not whet the edge, then must he put to more strength.", "Ecclesiastes 10:10", "Sharpen your tools."),
        ],
        &[
            ("The race is not to the swift, nor the battle to the strong.", "Ecclesiastes 9:11", "Stay humble about success."),
            ("Cast your bread upon the waters, for you shall find it after many days.", "Ecclesiastes 11:1", "Invest in others."),
            ("Wisdom gives life to them that have it.", "Ecclesiastes 7:12", "Keep growing."),
        ],
        &[
            ("Let us hear the conclusion of the whole matter.", "Ecclesiastes 12:13", "Know what matters most."),
            ("He has made every thing beautiful in its time.", "Ecclesiastes 3:11", "Appreciate the moment."),
            ("A threefold cord is not quickly broken.", "Ecclesiastes 4:12", "Strength in unity."),
        ],
    ],
};

const PSALMS: SourceDef = SourceDef {
    id: "psalms",
    name: "Tehillim (Psalms)",
    icon: "🎵",
    language: Language::Hebrew,
    quotes: [
        &[
            ("Though I walk through the valley of the shadow of death, I will fear no evil.", "Psalms 23:4", "You will get through this."),
            ("I lift up my eyes to the hills; from where does my help come?", "Psalms 121:1", "Ask for help."),
        ],
        &[
            ("This is the day which the Lord has made; let us rejoice and be glad in it.", "Psalms 118:24", "Find today's win."),
            ("Unless the Lord builds the house, those who build it labor in vain.", "Psalms 127:1", "Build on solid foundations."),
        ],
        &[
            ("Teach us to number our days, that we may get a heart of wisdom.", "Psalms 90:12", "Spend time deliberately."),
            ("How good and pleasant it is when brothers dwell together in unity.", "Psalms 133:1", "Harmony speeds delivery."),
        ],
        &[
            ("He shall be like a tree planted by streams of water, that yields its fruit in its season.", "Psalms 1:3", "Your work is bearing fruit."),
        ],
        &[
            ("They that sow in tears shall reap in joy.", "Psalms 126:5", "The struggle paid off."),
            ("The stone which the builders rejected has become the chief cornerstone.", "Psalms 118:22", "Honor the unglamorous work."),
        ],
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_source_ids_unique() {
        let mut seen = HashSet::new();
        for def in built_in_sources() {
            assert!(seen.insert(def.id), "duplicate source id {}", def.id);
        }
        assert_eq!(seen.len(), 17);
    }

    #[test]
    fn test_every_source_has_quotes() {
        for def in built_in_sources() {
            assert!(
                def.quotes.iter().any(|bucket| !bucket.is_empty()),
                "{} has no quotes",
                def.id
            );
        }
    }

    #[test]
    fn test_quote_fields_non_empty() {
        for def in built_in_sources() {
            for (text, attribution, encouragement) in def.quotes.iter().flat_map(|b| b.iter()) {
                assert!(!text.is_empty(), "{}: empty text", def.id);
                assert!(!attribution.is_empty(), "{}: empty attribution", def.id);
                assert!(!encouragement.is_empty(), "{}: empty encouragement", def.id);
            }
        }
    }

    #[test]
    fn test_hebrew_sources_fill_every_level() {
        for def in built_in_sources().iter().filter(|d| d.id == "proverbs" || d.id == "ecclesiastes") {
            assert!(def.quotes.iter().all(|bucket| !bucket.is_empty()), "{} has an empty level", def.id);
        }
    }

    #[test]
    fn test_hebrew_sources_tagged() {
        let hebrew: Vec<&str> = built_in_sources()
            .iter()
            .filter(|d| d.language == Language::Hebrew)
            .map(|d| d.id)
            .collect();
        assert_eq!(hebrew, vec!["pirkei_avot", "proverbs", "ecclesiastes", "psalms"]);
    }
}
