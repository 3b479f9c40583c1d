use super::NutrientCategory::*;
use super::RiskLevel::{High, Low, Moderate, Protective};
use super::TriggerCondition::*;
use super::Variant;

fn list(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

pub(super) fn builtin_variants() -> Vec<Variant> {
    vec![
        // Digestive & food tolerance
        Variant::new("rs4988235", "LCT/MCM6", "Lactose Intolerance", Digestion)
            .focus("Dairy/Lactose")
            .source("SNPedia rs4988235; PMID: 15114531")
            .effect("TT", Low, "Lactase persistent - you can digest dairy normally", "No dairy restrictions needed based on this gene.")
            .effect("CT", Moderate, "Intermediate lactase persistence (~65% enzyme activity)", "You may tolerate moderate dairy. Monitor for bloating, gas, or discomfort.")
            .effect("CC", High, "Lactase non-persistent - likely lactose intolerant", "Consider lactose-free dairy, lactase supplements, or plant-based milk.")
            .effect("AA", Low, "Lactase persistent (minus strand)", "No dairy restrictions needed.")
            .effect("AG", Moderate, "Intermediate lactase persistence (minus strand)", "Monitor for dairy-related symptoms.")
            .effect("GG", High, "Lactase non-persistent (minus strand)", "Consider lactose-free alternatives.")
            .increase(&["Lactose-free dairy alternatives"])
            .limit(&["Regular dairy products"])
            .trigger(DigestiveIssue(list(&["bloating", "gas", "diarrhea"])), "You reported {value} - lactose intolerance may be contributing.")
            .trigger(Allergy(list(&["dairy"])), "You already avoid dairy; cover calcium and vitamin D from other sources."),
        Variant::new("rs2187668", "HLA-DQ2.5", "Celiac Disease Risk", Digestion)
            .focus("Celiac Risk")
            .source("SNPedia rs2187668; PMID: 18311140")
            .effect("TT", Low, "Does not carry HLA-DQ2.5 risk allele", "Low genetic risk for celiac disease. This does not rule out gluten sensitivity.")
            .effect("CT", Moderate, "Carrier of one HLA-DQ2.5 risk allele", "Moderate celiac risk. If you have digestive issues, consider celiac testing.")
            .effect("CC", High, "Homozygous for HLA-DQ2.5 risk allele", "Higher celiac risk. Get tested if you have symptoms. Do NOT eliminate gluten before testing.")
            .effect("AA", Low, "Low celiac risk (minus strand)", "Low genetic risk for celiac.")
            .effect("AG", Moderate, "Moderate celiac risk (minus strand)", "Consider testing if symptomatic.")
            .effect("GG", High, "Higher celiac risk (minus strand)", "Consider celiac testing if symptomatic.")
            .trigger(DigestiveIssue(list(&["bloating", "diarrhea", "gas"])), "Consider celiac testing (do NOT eliminate gluten before testing).")
            .trigger(Allergy(list(&["gluten"])), "You already avoid gluten; celiac testing needs gluten in the diet beforehand."),
        Variant::new("rs1726866", "TAS2R38", "Bitter Taste Perception", Taste)
            .focus("Taste Preferences")
            .source("PMID: 12595690; SNPedia rs1726866")
            .effect("CC", Low, "Non-taster - reduced sensitivity to bitter compounds (PTC/PROP)", "You may find bitter vegetables (broccoli, kale, Brussels sprouts) more palatable. Include them regularly for their health benefits.")
            .effect("CT", Moderate, "Medium taster - moderate bitter sensitivity", "You have average bitter taste sensitivity. Cooking methods like roasting can reduce bitterness in vegetables.")
            .effect("TT", High, "Super-taster - highly sensitive to bitter compounds", "You may avoid healthy bitter vegetables. Try masking bitterness with olive oil, garlic, or cheese. Roasting reduces bitterness.")
            .effect("GG", Low, "Non-taster (minus strand)", "Bitter vegetables should be easy to enjoy.")
            .effect("AG", Moderate, "Medium taster (minus strand)", "Average bitter sensitivity.")
            .effect("AA", High, "Super-taster (minus strand)", "Try cooking methods to reduce vegetable bitterness.")
            .increase(&["Roasted cruciferous vegetables"]),
        Variant::new("rs1761667", "CD36", "Fat Taste Sensitivity", Taste)
            .focus("Fat Intake")
            .source("PMID: 21697823; SNPedia rs1761667")
            .effect("GG", Low, "Normal fat taste sensitivity", "You can detect fat in foods normally, which helps regulate fat intake naturally.")
            .effect("AG", Moderate, "Reduced fat taste sensitivity", "You may have slightly reduced ability to taste fat, potentially leading to higher fat consumption.")
            .effect("AA", High, "Low fat taste sensitivity", "You may not taste fat well, leading to overconsumption. Be mindful of portion sizes for fatty foods.")
            .limit(&["Fried and high-fat snacks"])
            .trigger(HealthGoal(list(&["weight_loss"])), "Measuring added fats helps with weight loss when taste cues are weaker."),
        // Caffeine & alcohol
        Variant::new("rs762551", "CYP1A2", "Caffeine Metabolism", Metabolism)
            .focus("Caffeine")
            .source("PMID: 16522833; SNPedia rs762551")
            .effect("AA", Low, "Fast caffeine metabolizer", "You process caffeine quickly. 3-4 cups of coffee/day is generally safe. May have cardiovascular benefits.")
            .effect("AC", Moderate, "Intermediate caffeine metabolizer", "Limit to 1-2 cups coffee/day. Avoid caffeine after 2 PM.")
            .effect("CC", High, "Slow caffeine metabolizer", "Limit to 1 cup coffee before noon. Slow metabolism increases heart disease risk with high caffeine intake.")
            .limit(&["Coffee after noon"])
            .trigger(CaffeineAbove(2), "You drink {value} cups/day but clear caffeine slowly.")
            .trigger(HealthGoal(list(&["sleep"])), "Cutting afternoon caffeine supports your sleep goal."),
        Variant::new("rs671", "ALDH2", "Alcohol Flush Reaction", Metabolism)
            .focus("Alcohol")
            .source("PMID: 24671021; SNPedia rs671")
            .effect("GG", Low, "Normal alcohol metabolism (functional ALDH2 enzyme)", "You metabolize alcohol normally. Standard alcohol guidelines apply (moderation).")
            .effect("AG", High, "Reduced ALDH2 activity - alcohol flush reaction", "You likely experience facial flushing with alcohol. Increased esophageal cancer risk with regular drinking. Limit alcohol significantly.")
            .effect("AA", High, "Very low ALDH2 activity - severe alcohol intolerance", "Strong alcohol intolerance. Even small amounts cause flushing and nausea. Avoid alcohol - significantly increased cancer risk.")
            .dominant('A', "AG")
            .limit(&["Alcoholic beverages"])
            .trigger(AlcoholFrequency(list(&["moderate", "frequent"])), "You report {value} drinking, which carries extra risk with this genotype."),
        Variant::new("rs1229984", "ADH1B", "Alcohol Metabolism Speed", Metabolism)
            .focus("Alcohol")
            .source("PMID: 21115004; SNPedia rs1229984")
            .effect("CC", Moderate, "Slow alcohol metabolism - typical for most Europeans", "Standard alcohol metabolism. Follow general moderation guidelines.")
            .effect("CT", Protective, "Faster alcohol metabolism - may be protective against alcoholism", "You metabolize alcohol faster, which may reduce risk of alcohol dependence.")
            .effect("TT", Protective, "Very fast alcohol metabolism - protective effect", "Very fast alcohol metabolism. Associated with lower risk of alcohol dependence.")
            .dominant('T', "CT")
            .trigger(AlcoholFrequency(list(&["frequent"])), "You report {value} drinking; keep within moderation guidelines."),
        // Vitamins & minerals
        Variant::new("rs1801133", "MTHFR", "Folate Metabolism (C677T)", Vitamins)
            .focus("Folate/B-Vitamins")
            .source("PMID: 24494987; SNPedia rs1801133")
            .effect("GG", Low, "Normal MTHFR enzyme activity (100%)", "Normal folate metabolism. Standard dietary folate intake is sufficient.")
            .effect("AG", Moderate, "Reduced MTHFR activity (~65%)", "Increase leafy greens, legumes, and fortified foods. Consider methylfolate supplement.")
            .effect("AA", High, "Significantly reduced MTHFR activity (~30%)", "Prioritize methylfolate (not folic acid). Eat folate-rich foods daily. Consider B-complex with methylated B vitamins.")
            .effect("CC", Low, "Normal MTHFR (minus strand)", "Normal folate metabolism.")
            .effect("CT", Moderate, "Reduced MTHFR (minus strand)", "Consider methylfolate.")
            .effect("TT", High, "Low MTHFR activity (minus strand)", "Prioritize methylated B vitamins.")
            .increase(&["Leafy greens", "Legumes"])
            .supplements(&["Methylfolate (L-5-MTHF)"])
            .trigger(CurrentSupplement(list(&["methylfolate"])), "You already take methylfolate, the form this genotype handles best."),
        Variant::new("rs1801131", "MTHFR", "Folate Metabolism (A1298C)", Vitamins)
            .focus("Folate/B-Vitamins")
            .source("PMID: 24494987; SNPedia rs1801131")
            .effect("TT", Low, "Normal MTHFR A1298C function", "This variant is normal. Check C677T (rs1801133) as well.")
            .effect("GT", Moderate, "One copy of A1298C variant - mild effect", "Mild impact on folate. More significant if combined with C677T variant.")
            .effect("GG", Moderate, "Two copies of A1298C variant", "Reduced BH4 production. May affect neurotransmitter synthesis. Support with methylfolate and B12.")
            .effect("AA", Low, "Normal (minus strand)", "Normal function.")
            .effect("AC", Moderate, "One variant copy (minus strand)", "Mild impact.")
            .effect("CC", Moderate, "Two variant copies (minus strand)", "Support with methylated B vitamins.")
            .increase(&["Leafy greens", "Legumes"])
            .supplements(&["Methylfolate (L-5-MTHF)"])
            .trigger(CurrentSupplement(list(&["methylfolate"])), "You already take methylfolate, the form this genotype handles best."),
        Variant::new("rs602662", "FUT2", "Vitamin B12 Absorption", Vitamins)
            .focus("Vitamin B12")
            .source("PMID: 19303062; SNPedia rs602662")
            .effect("GG", Low, "Secretor status - normal B12 absorption", "Normal B12 absorption from food. Standard dietary sources sufficient.")
            .effect("AG", Moderate, "Reduced secretor status - may have lower B12", "May have slightly lower B12 levels. Include B12-rich foods regularly (meat, fish, eggs, dairy).")
            .effect("AA", High, "Non-secretor - reduced B12 absorption", "Higher risk of B12 deficiency. Consider B12 supplements (methylcobalamin). Regular B12 blood tests recommended.")
            .increase(&["Fish", "Eggs"])
            .supplements(&["Vitamin B12 (methylcobalamin)"])
            .trigger(CurrentSupplement(list(&["vitamin_b12"])), "You already supplement B12; periodic blood tests confirm the dose is enough.")
            .trigger(DietType(list(&["vegan", "vegetarian"])), "As a {value}, fortified foods or a B12 supplement are essential."),
        Variant::new("rs1801394", "MTRR", "B12 Utilization", Vitamins)
            .focus("Vitamin B12")
            .source("PMID: 19116920; SNPedia rs1801394")
            .effect("AA", Low, "Normal MTRR function - efficient B12 recycling", "Normal B12 utilization. Standard intake sufficient.")
            .effect("AG", Moderate, "Reduced MTRR efficiency", "May need higher B12 intake. Use methylcobalamin form.")
            .effect("GG", High, "Significantly reduced B12 recycling", "Higher B12 requirements. Consider methylcobalamin supplement. Especially important if vegetarian/vegan.")
            .increase(&["Fish", "Eggs"])
            .supplements(&["Vitamin B12 (methylcobalamin)"])
            .trigger(CurrentSupplement(list(&["vitamin_b12"])), "You already supplement B12; periodic blood tests confirm the dose is enough.")
            .trigger(DietType(list(&["vegan", "vegetarian"])), "As a {value}, fortified foods or a B12 supplement are essential."),
        Variant::new("rs2228570", "VDR", "Vitamin D Receptor (FokI)", Vitamins)
            .focus("Vitamin D")
            .source("PMID: 27188403; SNPedia rs2228570")
            .effect("CC", Low, "Optimal VDR function - efficient vitamin D response", "Your cells respond well to vitamin D. Maintain adequate intake (sun, food, supplements if needed).")
            .effect("CT", Moderate, "Intermediate VDR function", "Slightly reduced vitamin D response. Ensure adequate vitamin D through sun, fatty fish, or supplements.")
            .effect("TT", High, "Reduced VDR function", "May need higher vitamin D levels for optimal function. Consider supplements. Test blood levels annually.")
            .effect("AA", Low, "Optimal VDR (minus strand)", "Efficient vitamin D response.")
            .effect("AG", Moderate, "Intermediate VDR (minus strand)", "Ensure adequate vitamin D.")
            .effect("GG", High, "Reduced VDR (minus strand)", "May need higher vitamin D intake.")
            .increase(&["Fatty fish"])
            .supplements(&["Vitamin D3"])
            .trigger(CurrentSupplement(list(&["vitamin_d"])), "You already supplement vitamin D; keep it up and check blood levels to tune the dose."),
        Variant::new("rs7041", "GC", "Vitamin D Transport", Vitamins)
            .focus("Vitamin D")
            .source("PMID: 20541252; SNPedia rs7041")
            .effect("GG", Low, "Normal vitamin D binding protein levels", "Normal vitamin D transport. Standard recommendations apply.")
            .effect("GT", Moderate, "Slightly lower vitamin D binding protein", "May have lower total vitamin D but similar free (active) vitamin D.")
            .effect("TT", High, "Lower vitamin D binding protein", "Lower total vitamin D levels common but may not affect free vitamin D. Discuss with doctor if levels are low.")
            .increase(&["Fatty fish"])
            .supplements(&["Vitamin D3"])
            .trigger(CurrentSupplement(list(&["vitamin_d"])), "You already supplement vitamin D; keep it up and check blood levels to tune the dose."),
        Variant::new("rs33972313", "SLC23A1", "Vitamin C Absorption", Vitamins)
            .focus("Vitamin C")
            .source("PMID: 20200966; SNPedia rs33972313")
            .effect("CC", Low, "Normal vitamin C transporter function", "Normal vitamin C absorption. Standard intake from fruits and vegetables is sufficient.")
            .effect("CT", Moderate, "Reduced vitamin C transport efficiency", "May benefit from higher vitamin C intake. Include citrus, berries, peppers, and broccoli daily.")
            .effect("TT", High, "Significantly reduced vitamin C absorption", "Higher vitamin C requirements. Eat vitamin C-rich foods with every meal. Consider supplements.")
            .increase(&["Citrus fruits", "Berries", "Bell peppers"])
            .supplements(&["Vitamin C"]),
        Variant::new("rs1799945", "HFE", "Iron Absorption (H63D)", Minerals)
            .focus("Iron")
            .source("PMID: 19159930; SNPedia rs1799945")
            .effect("CC", Low, "Normal iron absorption", "Standard iron intake appropriate. No genetic predisposition to iron overload.")
            .effect("CG", Moderate, "Carrier of H63D variant - slightly increased iron absorption", "Mild increased iron absorption. Monitor ferritin levels. Avoid iron supplements unless prescribed.")
            .effect("GG", High, "Homozygous H63D - increased iron absorption risk", "Monitor iron and ferritin annually. Avoid iron supplements and excessive red meat. Donate blood if levels are high.")
            .limit(&["Iron supplements (unless prescribed)", "Excess red meat"])
            .trigger(CurrentSupplement(list(&["iron"])), "You take an iron supplement; review it with your doctor given increased absorption."),
        // Macronutrient metabolism
        Variant::new("rs174546", "FADS1", "Omega-3/6 Fatty Acid Metabolism", Fats)
            .focus("Omega-3")
            .source("PMID: 21829377; SNPedia rs174546")
            .effect("CC", Low, "Efficient conversion of plant omega-3 to EPA/DHA", "You can convert plant sources (flax, chia, walnuts) to active omega-3s. Still beneficial to eat fatty fish.")
            .effect("CT", Moderate, "Intermediate omega-3 conversion ability", "Include both plant omega-3s and fatty fish (salmon, sardines, mackerel) 2-3 times per week.")
            .effect("TT", High, "Reduced ability to convert plant omega-3 to EPA/DHA", "Prioritize preformed EPA/DHA from fatty fish or algae supplements. Plant sources alone may be insufficient.")
            .increase(&["Fatty fish"])
            .supplements(&["Omega-3 (EPA/DHA)"])
            .trigger(DietType(list(&["vegan", "vegetarian"])), "As a {value}, consider algae-based omega-3 supplements.")
            .trigger(CurrentSupplement(list(&["omega_3"])), "You already take omega-3; check that it provides preformed EPA/DHA."),
        Variant::new("rs5082", "APOA2", "Saturated Fat Sensitivity", Fats)
            .focus("Saturated Fat")
            .source("PMID: 19858173; SNPedia rs5082")
            .effect("GG", Low, "Normal response to saturated fat", "Standard saturated fat guidelines apply. Focus on overall diet quality.")
            .effect("AG", Low, "Normal response to saturated fat", "No special saturated fat restrictions needed.")
            .effect("AA", High, "Increased weight gain with high saturated fat intake", "Limit saturated fat to <22g/day. Choose olive oil, avocados, nuts over butter and coconut oil. Keto/Paleo diets may not suit you.")
            .increase(&["Olive oil", "Avocados", "Nuts"])
            .limit(&["Butter", "Coconut oil"])
            .trigger(DietType(list(&["keto"])), "A {value} diet is usually high in saturated fat, which this genotype handles poorly."),
        Variant::new("rs7903146", "TCF7L2", "Carbohydrate Metabolism / Diabetes Risk", Carbs)
            .focus("Carbohydrates")
            .source("PMID: 22693455; SNPedia rs7903146")
            .effect("CC", Low, "Normal carbohydrate metabolism and insulin secretion", "Standard carbohydrate intake is fine. Focus on whole grains and fiber.")
            .effect("CT", Moderate, "Increased Type 2 diabetes risk (~40% higher)", "Prioritize low-glycemic carbs. Include protein with meals. Regular exercise helps significantly.")
            .effect("TT", High, "Significantly increased Type 2 diabetes risk (~80% higher)", "Limit refined carbs and grains. High-protein, Mediterranean-style diet recommended. Regular blood sugar monitoring advised.")
            .dominant('T', "CT")
            .increase(&["Low-glycemic carbohydrates", "Lean protein"])
            .limit(&["Refined carbohydrates", "Sugary drinks"])
            .trigger(ActivityLevel(list(&["sedentary", "light"])), "With a {value} activity level, adding regular exercise offsets much of this risk."),
        Variant::new("rs9939609", "FTO", "Obesity Risk / Satiety", Weight)
            .focus("Weight Management")
            .source("PMID: 17434869; SNPedia rs9939609")
            .effect("TT", Low, "Lower obesity risk - normal satiety signaling", "Standard diet and exercise recommendations apply.")
            .effect("AT", Moderate, "Moderately increased obesity risk (~30%)", "Focus on high-protein, high-fiber meals for satiety. Regular physical activity is especially important.")
            .effect("AA", High, "Increased obesity risk (~70%) - reduced satiety signaling", "Prioritize protein and fiber for fullness. Exercise is particularly effective at counteracting this variant. Mindful eating practices help.")
            .increase(&["High-protein foods", "High-fiber foods"])
            .trigger(HealthGoal(list(&["weight_loss"])), "Focus on protein and exercise rather than just calorie restriction."),
        Variant::new("rs4341", "ACE", "Exercise Response / Muscle Type", Fitness)
            .focus("Exercise Response")
            .source("PMID: 18043716; SNPedia rs4341")
            .effect("GG", Low, "Higher ACE activity - may favor power/strength activities", "May respond well to strength training and high-intensity exercise. Protein timing around workouts may be beneficial.")
            .effect("CG", Low, "Intermediate ACE activity - balanced response", "Balanced response to both endurance and strength training. Varied exercise program recommended.")
            .effect("CC", Low, "Lower ACE activity - may favor endurance activities", "May respond better to endurance exercise. Still important to include strength training for muscle maintenance."),
        Variant::new("rs7412", "APOE", "Fat Metabolism (APOE e2/e3/e4)", Fats)
            .focus("Fat Metabolism")
            .source("PMID: 24382546; SNPedia rs7412")
            .effect("CC", Low, "Part of APOE genotyping - see combined result", "This SNP combines with rs429358 to determine APOE type. e3/e3 is most common and neutral.")
            .effect("CT", Moderate, "May indicate APOE e2 carrier", "If APOE e2 carrier: generally favorable for cholesterol but may need higher fat-soluble vitamin intake.")
            .effect("TT", Moderate, "APOE e2/e2 possible", "APOE e2 is generally protective for heart disease but may increase triglycerides with high-carb diet.")
            .limit(&["High-glycemic carbohydrates"]),
        // Antioxidant & detox
        Variant::new("rs4880", "SOD2", "Antioxidant Capacity", Antioxidants)
            .focus("Antioxidants")
            .source("PMID: 15361839; SNPedia rs4880")
            .effect("AA", Moderate, "Higher SOD2 in mitochondria - may increase oxidative stress in some contexts", "Prioritize antioxidant-rich foods: berries, leafy greens, colorful vegetables. Avoid excessive iron/manganese supplements.")
            .effect("AG", Low, "Intermediate SOD2 activity", "Balanced antioxidant needs. Eat a variety of colorful fruits and vegetables.")
            .effect("GG", Low, "Normal SOD2 activity", "Standard antioxidant intake from diet is sufficient.")
            .effect("TT", Moderate, "Higher SOD2 (minus strand)", "Increase antioxidant intake.")
            .effect("CT", Low, "Intermediate SOD2 (minus strand)", "Balanced antioxidant needs.")
            .effect("CC", Low, "Normal SOD2 (minus strand)", "Standard antioxidant intake sufficient.")
            .increase(&["Berries", "Leafy greens", "Colorful vegetables"]),
        Variant::new("rs1695", "GSTP1", "Glutathione Detoxification", Detox)
            .focus("Detoxification")
            .source("PMID: 19131662; SNPedia rs1695")
            .effect("AA", Low, "Normal glutathione S-transferase activity", "Normal detoxification capacity. Include cruciferous vegetables for additional support.")
            .effect("AG", Moderate, "Reduced detoxification enzyme activity", "Increase cruciferous vegetables (broccoli, cauliflower, Brussels sprouts). Support glutathione with sulfur-rich foods.")
            .effect("GG", High, "Significantly reduced GSTP1 activity", "Prioritize detox support: cruciferous vegetables, garlic, onions. Consider N-acetyl cysteine (NAC). Minimize toxin exposure.")
            .increase(&["Cruciferous vegetables", "Garlic and onions"])
            .supplements(&["N-acetyl cysteine (NAC)"]),
        Variant::new("rs7501331", "BCMO1", "Beta-Carotene to Vitamin A Conversion", Vitamins)
            .focus("Vitamin A")
            .source("PMID: 19103647; SNPedia rs7501331")
            .effect("CC", Low, "Normal beta-carotene conversion to vitamin A", "You can effectively convert plant sources (carrots, sweet potatoes) to active vitamin A.")
            .effect("CT", Moderate, "Reduced beta-carotene conversion (~32% less)", "Include some preformed vitamin A sources (eggs, dairy, liver) alongside plant sources.")
            .effect("TT", High, "Significantly reduced conversion (~69% less)", "Relying on beta-carotene alone may lead to vitamin A insufficiency. Include retinol sources: eggs, dairy, fish. Vegans may need retinol supplements.")
            .increase(&["Eggs", "Preformed vitamin A sources"])
            .trigger(DietType(list(&["vegan"])), "As a {value}, a retinol supplement may be needed since plant beta-carotene converts poorly."),
        Variant::new("rs7946", "PEMT", "Choline Requirements", Vitamins)
            .focus("Choline")
            .source("PMID: 17630398; SNPedia rs7946")
            .effect("CC", Low, "Normal endogenous choline production", "Standard choline intake is sufficient. Include eggs, liver, or soy regularly.")
            .effect("CT", Moderate, "Reduced ability to produce choline internally", "May need more dietary choline. Best sources: eggs (highest), liver, fish, poultry.")
            .effect("TT", High, "Significantly reduced choline synthesis - higher dietary needs", "Prioritize choline-rich foods daily: eggs (2/day ideal), liver, fish. Especially important during pregnancy. Consider choline supplement if not eating eggs.")
            .effect("GG", Low, "Normal choline (minus strand)", "Standard intake sufficient.")
            .effect("AG", Moderate, "Reduced choline production (minus strand)", "Include eggs regularly.")
            .effect("AA", High, "Higher choline needs (minus strand)", "Prioritize eggs and liver.")
            .increase(&["Eggs"])
            .supplements(&["Choline"])
            .trigger(Allergy(list(&["eggs"])), "You avoid eggs; liver, fish, soy or a choline supplement can fill the gap.")
            .trigger(DietType(list(&["vegan"])), "As a {value}, soy and a choline supplement can replace eggs and liver."),
    ]
}
